//! CSV export - Lista de contatos em texto separado por ponto e vírgula

use crate::entities::Contact;

const HEADER: &str = "Nome;Telefone;Email;Sentimento";

/// Monta o CSV da lista de contatos (separador `;`, cabeçalho fixo).
pub fn contacts_to_csv(contacts: &[Contact]) -> String {
    let mut output = String::with_capacity(64 * (contacts.len() + 1));
    output.push_str(HEADER);
    output.push('\n');

    for contact in contacts {
        output.push_str(&escape(&contact.name));
        output.push(';');
        output.push_str(&contact.phone);
        output.push(';');
        output.push_str(&escape(contact.email.as_deref().unwrap_or_default()));
        output.push(';');
        output.push_str(contact.sentiment.map(|s| s.as_str()).unwrap_or_default());
        output.push('\n');
    }

    output
}

/// Aspas dobradas quando o campo carrega separador, aspas ou quebra de linha
fn escape(field: &str) -> String {
    if field.contains([';', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Sentiment;
    use chrono::Utc;

    fn contact(name: &str, phone: &str, sentiment: Option<Sentiment>) -> Contact {
        Contact {
            contact_id: 1,
            org_id: 1,
            name: name.to_string(),
            phone: phone.to_string(),
            email: None,
            sentiment,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn one_row_per_contact_plus_header() {
        let contacts = vec![
            contact("João", "5541999991111", Some(Sentiment::Positivo)),
            contact("Maria", "5541988887777", None),
        ];

        let csv = contacts_to_csv(&contacts);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), contacts.len() + 1);
        assert_eq!(lines[0], "Nome;Telefone;Email;Sentimento");
        assert_eq!(lines[1], "João;5541999991111;;Positivo");
        assert_eq!(lines[2], "Maria;5541988887777;;");
    }

    #[test]
    fn fields_with_separator_are_quoted() {
        let contacts = vec![contact("Silva; João \"Jota\"", "5541999991111", None)];
        let csv = contacts_to_csv(&contacts);
        assert!(csv.contains("\"Silva; João \"\"Jota\"\"\""));
    }

    #[test]
    fn empty_list_yields_only_header() {
        let csv = contacts_to_csv(&[]);
        assert_eq!(csv, "Nome;Telefone;Email;Sentimento\n");
    }
}
