//! # Frame — Instância de um Conceito
//!
//! Um [`Frame`] é um indivíduo concreto dentro de um mundo possível, etiquetado
//! com **exatamente um** conceito declarado — o tipo mais específico afirmado
//! na criação. A etiqueta é explícita e imutável: nenhum tipo é inferido da
//! estrutura do frame, e nenhuma mutação posterior é possível.
//!
//! A pergunta "este frame é uma Pessoa?" não é respondida aqui — o frame só
//! carrega o conceito declarado; quem sobe a hierarquia é
//! [`PossibleWorld::frame_instance_of`](super::PossibleWorld::frame_instance_of).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::ConceptId;

/// Alias de tipo para o identificador de um [Frame].
pub type FrameId = Uuid;

/// Instância de um conceito dentro de um mundo possível.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Frame {
    /// Identificador único (UUID v4) — gerado automaticamente na criação.
    pub id: FrameId,

    /// Rótulo legível da instância (ex: "Bob").
    pub label: String,

    /// Conceito declarado — o tipo mais específico afirmado na criação.
    /// Imutável durante toda a vida do frame.
    pub concept: ConceptId,

    /// Timestamp de criação no mundo.
    pub created_at: DateTime<Utc>,
}

impl Frame {
    /// Cria um novo frame. Restrito à crate: só
    /// [`PossibleWorld::create_frame`](super::PossibleWorld::create_frame)
    /// valida o conceito declarado antes de construir.
    pub(crate) fn new(label: impl Into<String>, concept: ConceptId) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            concept,
            created_at: Utc::now(),
        }
    }
}

/// Formatação legível no formato `Frame[rótulo]`.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame[{}]", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verifica o formato de exibição `Frame[rótulo]`
    #[test]
    fn test_display() {
        let frame = Frame::new("Bob", Uuid::new_v4());
        assert_eq!(frame.to_string(), "Frame[Bob]");
    }
}
