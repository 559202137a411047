//! XLSX export - Relatório de evento em planilha
//!
//! Mapeia o payload de analytics para quatro abas: Resumo, Por Hora,
//! Sentimentos e Status. A montagem das linhas é separada da escrita
//! para ser testável sem abrir o arquivo gerado.

use crate::dtos::EventAnalyticsDTO;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

/// Linhas da aba Resumo: (rótulo, valor)
fn summary_rows(analytics: &EventAnalyticsDTO) -> Vec<(&'static str, u64)> {
    vec![
        ("Total de mensagens", analytics.total_messages),
        ("Enviadas", analytics.enviados),
        ("Entregues", analytics.entregues),
        ("Lidas", analytics.lidos),
        ("Respondidas", analytics.respondidos),
        ("Falhas", analytics.falhas),
        ("Pendentes", analytics.pendentes),
    ]
}

/// Gera o workbook completo e devolve os bytes do arquivo.
pub fn build_event_workbook(
    event_title: &str,
    analytics: &EventAnalyticsDTO,
) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    // aba Resumo
    let sheet = workbook.add_worksheet();
    sheet.set_name("Resumo")?;
    sheet.write_string_with_format(0, 0, event_title, &bold)?;
    for (offset, (label, value)) in summary_rows(analytics).iter().enumerate() {
        let row = 2 + offset as u32;
        sheet.write_string(row, 0, *label)?;
        sheet.write_number(row, 1, *value as f64)?;
    }

    // aba Por Hora: 24 linhas fixas
    let sheet = workbook.add_worksheet();
    sheet.set_name("Por Hora")?;
    for (col, header) in ["Hora", "Enviadas", "Entregues", "Lidas", "Respondidas"]
        .iter()
        .enumerate()
    {
        sheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }
    for bucket in &analytics.hourly {
        let row = bucket.hour as u32 + 1;
        sheet.write_string(row, 0, format!("{:02}h", bucket.hour))?;
        sheet.write_number(row, 1, bucket.enviados as f64)?;
        sheet.write_number(row, 2, bucket.entregues as f64)?;
        sheet.write_number(row, 3, bucket.lidos as f64)?;
        sheet.write_number(row, 4, bucket.respondidos as f64)?;
    }

    // aba Sentimentos: 5 linhas fixas
    let sheet = workbook.add_worksheet();
    sheet.set_name("Sentimentos")?;
    for (col, header) in ["Sentimento", "Total", "Percentual"].iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }
    for (offset, slice) in analytics.sentiments.iter().enumerate() {
        let row = offset as u32 + 1;
        sheet.write_string(row, 0, slice.label.as_str())?;
        sheet.write_number(row, 1, slice.total as f64)?;
        sheet.write_number(row, 2, slice.percent)?;
    }

    // aba Status: histograma dinâmico
    let sheet = workbook.add_worksheet();
    sheet.set_name("Status")?;
    sheet.write_string_with_format(0, 0, "Status", &bold)?;
    sheet.write_string_with_format(0, 1, "Total", &bold)?;
    for (offset, entry) in analytics.by_status.iter().enumerate() {
        let row = offset as u32 + 1;
        sheet.write_string(row, 0, entry.status.as_str())?;
        sheet.write_number(row, 1, entry.total as f64)?;
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::{HourlyActivityDTO, SentimentSliceDTO, StatusCountDTO};
    use crate::entities::MessageStatus;

    fn sample_analytics() -> EventAnalyticsDTO {
        EventAnalyticsDTO {
            event_id: 7,
            total_messages: 10,
            enviados: 8,
            entregues: 6,
            lidos: 4,
            respondidos: 2,
            falhas: 1,
            pendentes: 2,
            hourly: (0..24)
                .map(|hour| HourlyActivityDTO {
                    hour,
                    enviados: u64::from(hour == 9) * 8,
                    entregues: u64::from(hour == 9) * 6,
                    lidos: u64::from(hour == 9) * 4,
                    respondidos: u64::from(hour == 9) * 2,
                })
                .collect(),
            sentiments: vec![
                SentimentSliceDTO { label: "Super Engajado".into(), total: 2, percent: 20.0 },
                SentimentSliceDTO { label: "Positivo".into(), total: 3, percent: 30.0 },
                SentimentSliceDTO { label: "Neutro".into(), total: 1, percent: 10.0 },
                SentimentSliceDTO { label: "Negativo".into(), total: 0, percent: 0.0 },
                SentimentSliceDTO { label: "Não Classificado".into(), total: 4, percent: 40.0 },
            ],
            by_status: vec![
                StatusCountDTO { status: MessageStatus::Lido, total: 2 },
                StatusCountDTO { status: MessageStatus::Fila, total: 2 },
            ],
        }
    }

    #[test]
    fn summary_has_one_row_per_metric() {
        let analytics = sample_analytics();
        let rows = summary_rows(&analytics);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], ("Total de mensagens", 10));
    }

    #[test]
    fn workbook_bytes_look_like_a_zip() {
        let analytics = sample_analytics();
        let bytes = build_event_workbook("Lançamento", &analytics).unwrap();
        // XLSX é um container ZIP: assinatura PK\x03\x04
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }
}
