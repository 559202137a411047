//! Import DTOs - Data Transfer Objects da importação de contatos

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Corpo do POST de importação: texto colado ou conteúdo de um CSV.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct ImportRequestDTO {
    #[validate(length(min = 1, message = "Import text must not be empty"))]
    pub text: String,

    // nome atribuído a linhas sem nome; "Contato Importado" quando omitido
    pub default_name: Option<String>,
}

/// Uma linha rejeitada: número 1-based, conteúdo original e motivo.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImportErrorDTO {
    pub line: usize,
    pub content: String,
    pub reason: String,
}

/// Resultado da importação. Linhas com erro não abortam o lote:
/// entram em `errors` e o laço continua.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ImportReportDTO {
    pub total_lines: usize,
    pub imported: usize,
    pub updated: usize,
    pub errors: Vec<ImportErrorDTO>,
}
