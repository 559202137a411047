//! Analytics module - Agregação de disparos em passada única
//!
//! Funções puras sobre linhas já buscadas do banco: contadores
//! acumulados em baldes fixos (24 horários, 5 de sentimento) e um
//! histograma dinâmico de status. Uma única implementação atende tanto
//! o endpoint autenticado quanto o endpoint público de status de
//! evento.
//!
//! Os TOTAIS exatos nunca saem daqui: vêm de queries count-only do
//! repositório, porque o fetch de linhas é limitado ao teto de página.

use crate::dtos::{HourlyActivityDTO, SentimentSliceDTO, StatusCountDTO};
use crate::entities::{Message, MessageStatus, Sentiment};
use chrono::Timelike;

/// Rótulo do quinto balde de sentimento (mensagens sem classificação).
pub const UNCLASSIFIED_LABEL: &str = "Não Classificado";

/// Acumula os 24 baldes horários a partir de `data_envio`.
///
/// `enviados` conta mensagens com status fora de {pendente, fila};
/// `entregues`/`lidos`/`respondidos` são o funil acumulado (uma
/// mensagem respondida conta nas três colunas). Mensagens sem carimbo
/// de envio não entram em nenhum balde.
pub fn hourly_activity(messages: &[Message]) -> Vec<HourlyActivityDTO> {
    let mut buckets: Vec<HourlyActivityDTO> = (0..24)
        .map(|hour| HourlyActivityDTO {
            hour,
            enviados: 0,
            entregues: 0,
            lidos: 0,
            respondidos: 0,
        })
        .collect();

    for message in messages {
        if !message.counts_as_sent() {
            continue;
        }
        let Some(sent_at) = message.data_envio else {
            continue;
        };

        let bucket = &mut buckets[sent_at.hour() as usize];
        bucket.enviados += 1;
        match message.status {
            MessageStatus::Entregue => bucket.entregues += 1,
            MessageStatus::Lido => {
                bucket.entregues += 1;
                bucket.lidos += 1;
            }
            MessageStatus::Respondido => {
                bucket.entregues += 1;
                bucket.lidos += 1;
                bucket.respondidos += 1;
            }
            _ => {}
        }
    }

    buckets
}

/// Distribui as mensagens nos 5 baldes de sentimento com percentuais
/// derivados do total da passada (somam 100 quando há mensagens, 0
/// quando não há).
pub fn sentiment_distribution(messages: &[Message]) -> Vec<SentimentSliceDTO> {
    let mut counts = [0u64; 5];
    for message in messages {
        let index = match message.sentiment {
            Some(Sentiment::SuperEngajado) => 0,
            Some(Sentiment::Positivo) => 1,
            Some(Sentiment::Neutro) => 2,
            Some(Sentiment::Negativo) => 3,
            None => 4,
        };
        counts[index] += 1;
    }

    let total: u64 = counts.iter().sum();

    Sentiment::ALL
        .iter()
        .map(Sentiment::as_str)
        .chain(std::iter::once(UNCLASSIFIED_LABEL))
        .zip(counts.iter())
        .map(|(label, &count)| SentimentSliceDTO {
            label: label.to_string(),
            total: count,
            percent: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
        })
        .collect()
}

/// Histograma dinâmico status -> contagem, na ordem de primeira
/// aparição.
pub fn status_histogram(messages: &[Message]) -> Vec<StatusCountDTO> {
    let mut histogram: Vec<StatusCountDTO> = Vec::new();

    for message in messages {
        match histogram.iter_mut().find(|e| e.status == message.status) {
            Some(entry) => entry.total += 1,
            None => histogram.push(StatusCountDTO {
                status: message.status.clone(),
                total: 1,
            }),
        }
    }

    histogram
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn message(status: MessageStatus, sentiment: Option<Sentiment>, hour: Option<u32>) -> Message {
        Message {
            message_id: 0,
            org_id: 1,
            contact_id: 1,
            campaign_id: None,
            event_id: Some(1),
            instance_id: None,
            content: "oi".to_string(),
            status,
            sentiment,
            data_envio: hour.map(|h| Utc.with_ymd_and_hms(2026, 3, 10, h, 30, 0).unwrap()),
            created_at: Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn hourly_enviados_sum_matches_non_pending_count() {
        let messages = vec![
            message(MessageStatus::Enviado, None, Some(9)),
            message(MessageStatus::Entregue, None, Some(9)),
            message(MessageStatus::Lido, None, Some(14)),
            message(MessageStatus::Respondido, None, Some(23)),
            message(MessageStatus::Erro, None, Some(0)),
            // pendente/fila não contam como enviados
            message(MessageStatus::Pendente, None, None),
            message(MessageStatus::Fila, None, None),
        ];

        let buckets = hourly_activity(&messages);
        assert_eq!(buckets.len(), 24);

        let enviados: u64 = buckets.iter().map(|b| b.enviados).sum();
        let expected = messages.iter().filter(|m| m.counts_as_sent()).count() as u64;
        assert_eq!(enviados, expected);
        assert_eq!(enviados, 5);
    }

    #[test]
    fn hourly_buckets_follow_data_envio_hour() {
        let messages = vec![
            message(MessageStatus::Respondido, None, Some(14)),
            message(MessageStatus::Enviado, None, Some(14)),
        ];

        let buckets = hourly_activity(&messages);
        assert_eq!(buckets[14].enviados, 2);
        assert_eq!(buckets[14].entregues, 1);
        assert_eq!(buckets[14].lidos, 1);
        assert_eq!(buckets[14].respondidos, 1);
        assert_eq!(buckets[9].enviados, 0);
    }

    #[test]
    fn sentiment_percentages_sum_to_100() {
        let messages = vec![
            message(MessageStatus::Respondido, Some(Sentiment::SuperEngajado), Some(9)),
            message(MessageStatus::Lido, Some(Sentiment::Positivo), Some(9)),
            message(MessageStatus::Lido, Some(Sentiment::Positivo), Some(10)),
            message(MessageStatus::Enviado, Some(Sentiment::Negativo), Some(11)),
            message(MessageStatus::Enviado, None, Some(11)),
            message(MessageStatus::Enviado, None, Some(12)),
            message(MessageStatus::Pendente, None, None),
        ];

        let slices = sentiment_distribution(&messages);
        assert_eq!(slices.len(), 5);

        let sum: f64 = slices.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);

        let total: u64 = slices.iter().map(|s| s.total).sum();
        assert_eq!(total, messages.len() as u64);
    }

    #[test]
    fn sentiment_percentages_are_zero_without_messages() {
        let slices = sentiment_distribution(&[]);
        assert_eq!(slices.len(), 5);
        assert!(slices.iter().all(|s| s.percent == 0.0 && s.total == 0));
    }

    #[test]
    fn status_histogram_keeps_first_seen_order() {
        let messages = vec![
            message(MessageStatus::Lido, None, Some(9)),
            message(MessageStatus::Fila, None, None),
            message(MessageStatus::Lido, None, Some(10)),
        ];

        let histogram = status_histogram(&messages);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram[0].status, MessageStatus::Lido);
        assert_eq!(histogram[0].total, 2);
        assert_eq!(histogram[1].status, MessageStatus::Fila);
        assert_eq!(histogram[1].total, 1);
    }
}
