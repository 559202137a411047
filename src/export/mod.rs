//! Export module - Geração de arquivos para download
//!
//! Transformações diretas e determinísticas: um objeto de analytics ou
//! uma lista de contatos entra, bytes de arquivo saem. Sem retry: a
//! falha é capturada no handler, logada e aborta a única tentativa.

pub mod csv;
pub mod pdf;
pub mod xlsx;

pub use csv::contacts_to_csv;
pub use pdf::render_event_report;
pub use xlsx::build_event_workbook;
