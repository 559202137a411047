//! PDF export - Relatório de evento em A4
//!
//! Chamadas de desenho sequenciais sobre o canvas do documento, com
//! contabilidade manual de altura: cada bloco declara quanto espaço
//! precisa e o builder abre página nova quando o cursor não comporta.

use crate::dtos::EventAnalyticsDTO;
use chrono::{DateTime, Utc};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 18.0;
const LINE_HEIGHT: f64 = 6.0;

/// Canvas com cursor vertical e quebra de página automática.
struct ReportBuilder {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    // distância do topo já consumida, em mm
    cursor: f64,
}

impl ReportBuilder {
    fn new(title: &str) -> Result<Self, printpdf::Error> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Camada 1");
        let layer = doc.get_page(page).get_layer(layer);
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let font_bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

        Ok(Self {
            doc,
            layer,
            font,
            font_bold,
            cursor: MARGIN,
        })
    }

    /// Garante espaço para um bloco de `height` mm; senão, página nova
    fn ensure_space(&mut self, height: f64) {
        if self.cursor + height > PAGE_HEIGHT - MARGIN {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Camada 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.cursor = MARGIN;
        }
    }

    /// Converte o cursor (distância do topo) para a coordenada do PDF
    /// (origem no canto inferior esquerdo)
    fn baseline(&self) -> Mm {
        Mm(PAGE_HEIGHT - self.cursor)
    }

    fn text(&mut self, content: &str, size: f64, x: f64, bold: bool) {
        let font = if bold { &self.font_bold } else { &self.font };
        self.layer
            .use_text(content, size, Mm(x), self.baseline(), font);
    }

    fn line_break(&mut self, height: f64) {
        self.cursor += height;
    }

    /// Retângulo preenchido (barras e faixas de seção)
    fn filled_rect(&mut self, x: f64, width: f64, height: f64, color: (f64, f64, f64)) {
        let top = PAGE_HEIGHT - self.cursor;
        let bottom = top - height;
        let points = vec![
            (Point::new(Mm(x), Mm(top)), false),
            (Point::new(Mm(x + width), Mm(top)), false),
            (Point::new(Mm(x + width), Mm(bottom)), false),
            (Point::new(Mm(x), Mm(bottom)), false),
        ];
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(color.0, color.1, color.2, None)));
        self.layer.add_shape(Line {
            points,
            is_closed: true,
            has_fill: true,
            has_stroke: false,
            is_clipping_path: false,
        });
        // volta para preto para o texto seguinte
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    }

    fn section_heading(&mut self, title: &str) {
        self.ensure_space(3.0 + LINE_HEIGHT * 2.0);
        self.line_break(4.0);
        self.filled_rect(MARGIN, PAGE_WIDTH - 2.0 * MARGIN, 1.2, (0.13, 0.55, 0.13));
        self.line_break(LINE_HEIGHT);
        self.text(title, 13.0, MARGIN, true);
        self.line_break(LINE_HEIGHT * 1.5);
    }

    /// Linha de tabela com colunas em posições fixas
    fn table_row(&mut self, cells: &[&str], columns: &[f64], bold: bool) {
        self.ensure_space(LINE_HEIGHT);
        for (cell, x) in cells.iter().zip(columns.iter()) {
            self.text(cell, 10.0, *x, bold);
        }
        self.line_break(LINE_HEIGHT);
    }

    fn finish(self) -> Result<Vec<u8>, printpdf::Error> {
        self.doc.save_to_bytes()
    }
}

/// Gera o relatório completo de um evento e devolve os bytes do PDF.
pub fn render_event_report(
    event_title: &str,
    analytics: &EventAnalyticsDTO,
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>, printpdf::Error> {
    let mut report = ReportBuilder::new("Relatório de Evento")?;

    // cabeçalho
    report.line_break(LINE_HEIGHT);
    report.text(event_title, 18.0, MARGIN, true);
    report.line_break(LINE_HEIGHT);
    report.text(
        &format!("Gerado em {}", generated_at.format("%d/%m/%Y %H:%M UTC")),
        9.0,
        MARGIN,
        false,
    );
    report.line_break(LINE_HEIGHT);

    // resumo
    report.section_heading("Resumo");
    let summary = [
        ("Total de mensagens", analytics.total_messages),
        ("Enviadas", analytics.enviados),
        ("Entregues", analytics.entregues),
        ("Lidas", analytics.lidos),
        ("Respondidas", analytics.respondidos),
        ("Falhas", analytics.falhas),
        ("Pendentes", analytics.pendentes),
    ];
    for (label, value) in summary {
        report.table_row(&[label, &value.to_string()], &[MARGIN, 90.0], false);
    }

    // atividade por hora (só as horas com movimento, senão 24 linhas vazias)
    report.section_heading("Atividade por Hora");
    report.table_row(
        &["Hora", "Enviadas", "Entregues", "Lidas", "Respondidas"],
        &[MARGIN, 50.0, 85.0, 120.0, 155.0],
        true,
    );
    for bucket in analytics.hourly.iter().filter(|b| b.enviados > 0) {
        report.table_row(
            &[
                &format!("{:02}h", bucket.hour),
                &bucket.enviados.to_string(),
                &bucket.entregues.to_string(),
                &bucket.lidos.to_string(),
                &bucket.respondidos.to_string(),
            ],
            &[MARGIN, 50.0, 85.0, 120.0, 155.0],
            false,
        );
    }

    // distribuição de sentimento com barra proporcional
    report.section_heading("Sentimentos");
    for slice in &analytics.sentiments {
        report.ensure_space(LINE_HEIGHT);
        report.text(&slice.label, 10.0, MARGIN, false);
        report.text(
            &format!("{} ({:.1}%)", slice.total, slice.percent),
            10.0,
            90.0,
            false,
        );
        let bar_width = (slice.percent / 100.0) * 60.0;
        if bar_width > 0.0 {
            report.filled_rect(130.0, bar_width, 3.5, (0.13, 0.55, 0.13));
        }
        report.line_break(LINE_HEIGHT);
    }

    // histograma de status
    report.section_heading("Status dos Disparos");
    report.table_row(&["Status", "Total"], &[MARGIN, 90.0], true);
    for entry in &analytics.by_status {
        report.table_row(
            &[entry.status.as_str(), &entry.total.to_string()],
            &[MARGIN, 90.0],
            false,
        );
    }

    report.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::{HourlyActivityDTO, SentimentSliceDTO, StatusCountDTO};
    use crate::entities::MessageStatus;

    fn sample_analytics() -> EventAnalyticsDTO {
        EventAnalyticsDTO {
            event_id: 7,
            total_messages: 42,
            enviados: 40,
            entregues: 30,
            lidos: 20,
            respondidos: 5,
            falhas: 2,
            pendentes: 2,
            hourly: (0..24)
                .map(|hour| HourlyActivityDTO {
                    hour,
                    enviados: u64::from(hour >= 8 && hour <= 11) * 10,
                    entregues: u64::from(hour >= 8 && hour <= 11) * 7,
                    lidos: u64::from(hour >= 8 && hour <= 11) * 5,
                    respondidos: u64::from(hour == 9),
                })
                .collect(),
            sentiments: vec![
                SentimentSliceDTO { label: "Super Engajado".into(), total: 10, percent: 23.8 },
                SentimentSliceDTO { label: "Positivo".into(), total: 12, percent: 28.6 },
                SentimentSliceDTO { label: "Neutro".into(), total: 8, percent: 19.0 },
                SentimentSliceDTO { label: "Negativo".into(), total: 2, percent: 4.8 },
                SentimentSliceDTO { label: "Não Classificado".into(), total: 10, percent: 23.8 },
            ],
            by_status: vec![
                StatusCountDTO { status: MessageStatus::Entregue, total: 10 },
                StatusCountDTO { status: MessageStatus::Lido, total: 15 },
                StatusCountDTO { status: MessageStatus::Respondido, total: 5 },
            ],
        }
    }

    #[test]
    fn report_bytes_start_with_pdf_magic() {
        let bytes =
            render_event_report("Lançamento Primavera", &sample_analytics(), Utc::now()).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn long_report_paginates_without_panicking() {
        // seção de status inflada para forçar várias quebras de página
        let mut analytics = sample_analytics();
        analytics.by_status = (0..200)
            .map(|i| StatusCountDTO {
                status: if i % 2 == 0 {
                    MessageStatus::Lido
                } else {
                    MessageStatus::Entregue
                },
                total: i,
            })
            .collect();

        let bytes = render_event_report("Evento Longo", &analytics, Utc::now()).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }
}
