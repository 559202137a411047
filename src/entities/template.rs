//! Template entity - Corpo de mensagem reutilizável com placeholders {{variavel}}

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    // {{ nome }}, {{nome}}, {{ primeiro_nome }}
    static ref VAR_RE: Regex = Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap();
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Template {
    pub template_id: i32,
    pub org_id: i32,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Template {
    /// Substitui os placeholders `{{variavel}}` pelos valores do mapa.
    /// Placeholder sem valor correspondente fica intacto no texto.
    pub fn render(&self, vars: &HashMap<String, String>) -> String {
        VAR_RE
            .replace_all(&self.content, |caps: &Captures| {
                match vars.get(&caps[1]) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;

    fn template(content: &str) -> Template {
        Template {
            template_id: 1,
            org_id: 1,
            name: "boas-vindas".to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn renders_known_placeholders() {
        let t = template("Olá {{nome}}, seu número é {{ telefone }}!");
        let mut vars = HashMap::new();
        vars.insert("nome".to_string(), "João".to_string());
        vars.insert("telefone".to_string(), "5541999991111".to_string());
        assert_eq!(t.render(&vars), "Olá João, seu número é 5541999991111!");
    }

    #[test]
    fn unknown_placeholder_is_left_untouched() {
        let t = template("Olá {{nome}}, até {{data}}");
        let mut vars = HashMap::new();
        vars.insert("nome".to_string(), "Ana".to_string());
        assert_eq!(t.render(&vars), "Olá Ana, até {{data}}");
    }
}
