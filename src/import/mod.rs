//! Import module - Parser de contatos em texto livre / CSV
//!
//! Uma passada única, sem backtracking: cada linha não vazia é separada
//! em nome e telefone pelo primeiro delimitador reconhecido, o telefone
//! é normalizado (somente dígitos, DDI prefixado quando for número
//! local) e linhas inválidas viram entradas de erro com número de linha
//! 1-based — o lote nunca aborta por causa de uma linha ruim.

use crate::dtos::ImportErrorDTO;
use lazy_static::lazy_static;
use regex::Regex;

/// DDI usado quando a organização não define o próprio.
pub const DEFAULT_COUNTRY_CODE: &str = "55";

/// Nome atribuído a linhas que só trazem o telefone.
pub const DEFAULT_CONTACT_NAME: &str = "Contato Importado";

lazy_static! {
    /// Tudo que não é dígito, para a limpeza do telefone.
    static ref NON_DIGIT_RE: Regex = Regex::new(r"\D+").unwrap();

    /// Formato de slug de organização/evento (também usado pelo validator nos DTOs).
    pub static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();

    // cabeçalho típico de CSV exportado pelo próprio painel
    static ref HEADER_RE: Regex =
        Regex::new(r"(?i)^(nome|name|telefone|phone)\s*[;,\t]").unwrap();
}

/// Um contato extraído de uma linha válida. `line` é a primeira linha
/// (1-based) em que o telefone apareceu.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedContact {
    pub line: usize,
    pub name: String,
    pub phone: String,
}

/// Saída do parser: contatos válidos (já deduplicados por telefone
/// dentro do lote) e as linhas rejeitadas.
#[derive(Debug, Clone, Default)]
pub struct ParsedBatch {
    pub contacts: Vec<ParsedContact>,
    pub errors: Vec<ImportErrorDTO>,
    pub total_lines: usize,
}

/// Normaliza um telefone bruto para o formato canônico (somente
/// dígitos, com DDI).
///
/// Regras:
/// - 10 ou 11 dígitos: número local, recebe o DDI exatamente uma vez;
/// - 12 ou 13 dígitos já começando pelo DDI: passa inalterado;
/// - qualquer outra contagem: rejeitado com o motivo.
pub fn normalize_phone(raw: &str, country_code: &str) -> Result<String, String> {
    let digits = NON_DIGIT_RE.replace_all(raw, "").into_owned();

    match digits.len() {
        0 => Err("no digits found".to_string()),
        1..=9 => Err(format!("phone has too few digits ({})", digits.len())),
        10 | 11 => Ok(format!("{}{}", country_code, digits)),
        12 | 13 if digits.starts_with(country_code) => Ok(digits),
        12 | 13 => Err(format!(
            "phone with {} digits does not start with country code {}",
            digits.len(),
            country_code
        )),
        n => Err(format!("phone has too many digits ({})", n)),
    }
}

/// Separa uma linha em (nome opcional, telefone bruto).
///
/// Delimitadores testados em ordem fixa: " - ", ";", ",", tab. Sem
/// delimitador, a linha inteira é telefone quando não contém letras;
/// caso contrário o último token separado por espaço é o telefone e o
/// resto é o nome.
fn split_line(line: &str) -> (Option<String>, String) {
    for delimiter in [" - ", ";", ",", "\t"] {
        if let Some((left, right)) = line.split_once(delimiter) {
            let left = left.trim();
            let right = right.trim();
            // o campo com mais dígitos é o telefone, o outro é o nome
            let left_digits = left.chars().filter(|c| c.is_ascii_digit()).count();
            let right_digits = right.chars().filter(|c| c.is_ascii_digit()).count();
            let (name, phone) = if left_digits > right_digits {
                (right, left)
            } else {
                (left, right)
            };
            let name = (!name.is_empty()).then(|| name.to_string());
            return (name, phone.to_string());
        }
    }

    if !line.chars().any(|c| c.is_alphabetic()) {
        return (None, line.trim().to_string());
    }

    match line.trim().rsplit_once(char::is_whitespace) {
        Some((name, phone)) => (Some(name.trim().to_string()), phone.to_string()),
        None => (None, line.trim().to_string()),
    }
}

/// Faz o parse de um texto colado ou CSV inteiro.
///
/// - linhas em branco são puladas em silêncio;
/// - um cabeçalho de CSV na primeira linha é pulado;
/// - telefone repetido dentro do lote funde com a entrada anterior em
///   vez de duplicar (o nome não-padrão mais recente vence).
pub fn parse_contact_list(text: &str, country_code: &str, default_name: &str) -> ParsedBatch {
    let mut batch = ParsedBatch::default();

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            continue;
        }
        if line_number == 1 && HEADER_RE.is_match(line) {
            continue;
        }

        batch.total_lines += 1;

        let (name, raw_phone) = split_line(line);
        let phone = match normalize_phone(&raw_phone, country_code) {
            Ok(phone) => phone,
            Err(reason) => {
                batch.errors.push(ImportErrorDTO {
                    line: line_number,
                    content: raw_line.to_string(),
                    reason,
                });
                continue;
            }
        };

        let name = name.unwrap_or_else(|| default_name.to_string());

        match batch.contacts.iter_mut().find(|c| c.phone == phone) {
            Some(existing) => {
                // fusão dentro do lote: mantém a entrada, melhora o nome
                if name != default_name {
                    existing.name = name;
                }
            }
            None => batch.contacts.push(ParsedContact {
                line: line_number,
                name,
                phone,
            }),
        }
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_prefixes_local_numbers_once() {
        assert_eq!(normalize_phone("41999991111", "55").unwrap(), "5541999991111");
        assert_eq!(normalize_phone("4199999111", "55").unwrap(), "554199999111");
        // já com DDI: passa inalterado, sem prefixar de novo
        assert_eq!(normalize_phone("5541999991111", "55").unwrap(), "5541999991111");
    }

    #[test]
    fn normalize_strips_formatting_characters() {
        assert_eq!(
            normalize_phone("(41) 99999-1111", "55").unwrap(),
            "5541999991111"
        );
        assert_eq!(
            normalize_phone("+55 41 99999-1111", "55").unwrap(),
            "5541999991111"
        );
    }

    #[test]
    fn normalize_rejects_out_of_range_digit_counts() {
        assert!(normalize_phone("419999", "55").is_err());
        assert!(normalize_phone("", "55").is_err());
        assert!(normalize_phone("55419999911112345", "55").is_err());
        // 12 dígitos mas sem o DDI esperado
        assert!(normalize_phone("994199999111", "55").is_err());
    }

    #[test]
    fn parses_name_dash_phone_line() {
        let batch = parse_contact_list("João Silva - 41999991111", "55", DEFAULT_CONTACT_NAME);
        assert_eq!(
            batch.contacts,
            vec![ParsedContact {
                line: 1,
                name: "João Silva".to_string(),
                phone: "5541999991111".to_string(),
            }]
        );
        assert!(batch.errors.is_empty());
    }

    #[test]
    fn bare_number_gets_default_name() {
        let batch = parse_contact_list("41987654321", "55", DEFAULT_CONTACT_NAME);
        assert_eq!(batch.contacts.len(), 1);
        assert_eq!(batch.contacts[0].name, DEFAULT_CONTACT_NAME);
        assert_eq!(batch.contacts[0].phone, "5541987654321");
    }

    #[test]
    fn csv_fields_in_either_order() {
        let batch = parse_contact_list(
            "Maria,41988887777\n41977776666,Pedro",
            "55",
            DEFAULT_CONTACT_NAME,
        );
        assert_eq!(batch.contacts[0].name, "Maria");
        assert_eq!(batch.contacts[0].phone, "5541988887777");
        assert_eq!(batch.contacts[1].name, "Pedro");
        assert_eq!(batch.contacts[1].phone, "5541977776666");
    }

    #[test]
    fn short_number_produces_error_with_line_number() {
        let batch = parse_contact_list(
            "João Silva - 41999991111\nAna - 419\n\nCarlos - 41988887777",
            "55",
            DEFAULT_CONTACT_NAME,
        );
        assert_eq!(batch.contacts.len(), 2);
        assert_eq!(batch.errors.len(), 1);
        // linha 2, 1-based; a linha em branco não conta como erro
        assert_eq!(batch.errors[0].line, 2);
        assert!(batch.errors[0].reason.contains("too few digits"));
    }

    #[test]
    fn header_line_is_skipped() {
        let batch = parse_contact_list(
            "Nome;Telefone\nJoão;41999991111",
            "55",
            DEFAULT_CONTACT_NAME,
        );
        assert_eq!(batch.total_lines, 1);
        assert_eq!(batch.contacts.len(), 1);
        assert_eq!(batch.contacts[0].name, "João");
    }

    #[test]
    fn duplicate_phone_in_batch_merges() {
        let batch = parse_contact_list(
            "41999991111\nJoão Silva - 41999991111",
            "55",
            DEFAULT_CONTACT_NAME,
        );
        assert_eq!(batch.contacts.len(), 1);
        // o nome não-padrão vence sobre o placeholder
        assert_eq!(batch.contacts[0].name, "João Silva");
    }

    #[test]
    fn name_with_spaces_and_no_delimiter() {
        let batch = parse_contact_list("Ana Paula Souza 41999991111", "55", DEFAULT_CONTACT_NAME);
        assert_eq!(batch.contacts.len(), 1);
        assert_eq!(batch.contacts[0].name, "Ana Paula Souza");
        assert_eq!(batch.contacts[0].phone, "5541999991111");
    }
}
