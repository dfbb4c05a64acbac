//! # Link — Instância de uma Relação
//!
//! Um [`Link`] conecta dois [`Frame`](super::Frame)s de um mesmo mundo sob uma
//! relação declarada. As pontas são **referências por identificador**, não
//! posse — os frames continuam pertencendo ao mundo.
//!
//! A validação de assinatura (o frame de origem satisfaz o domínio da relação,
//! o de destino satisfaz a imagem) acontece **uma única vez**, na criação, em
//! [`PossibleWorld::create_link`](super::PossibleWorld::create_link). Depois
//! disso o link é imutável.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::ConceptId;

use super::frame::FrameId;

/// Alias de tipo para o identificador de um [Link].
pub type LinkId = Uuid;

/// Instância de uma relação, conectando dois frames do mesmo mundo.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Link {
    /// Identificador único (UUID v4).
    pub id: LinkId,

    /// Relação declarada — o tipo mais específico afirmado na criação.
    pub relation: ConceptId,

    /// Frame de origem (lado do domínio da relação).
    pub source: FrameId,

    /// Frame de destino (lado da imagem da relação).
    pub target: FrameId,

    /// Timestamp de criação no mundo.
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Cria um novo link. Restrito à crate: só
    /// [`PossibleWorld::create_link`](super::PossibleWorld::create_link)
    /// valida relação, pontas e assinatura antes de construir.
    pub(crate) fn new(relation: ConceptId, source: FrameId, target: FrameId) -> Self {
        Self {
            id: Uuid::new_v4(),
            relation,
            source,
            target,
            created_at: Utc::now(),
        }
    }
}
