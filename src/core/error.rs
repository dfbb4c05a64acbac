//! # Erros do Motor Ontológico
//!
//! Taxonomia de erros compartilhada pela T-Box ([`KripkeScale`](super::KripkeScale))
//! e pela A-Box ([`PossibleWorld`](crate::world::PossibleWorld)).
//!
//! Todos os erros são **locais e síncronos** — o chamador precisa corrigir a
//! entrada; nenhuma operação é reexecutada internamente. O binário de
//! demonstração apenas propaga o erro e encerra com código diferente de zero.

use std::fmt;

use thiserror::Error;

/// Alias de resultado usado em todo o motor ontológico.
pub type Result<T> = std::result::Result<T, OntologyError>;

/// Lado da assinatura de uma relação violado por um frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstraintSide {
    /// Restrição sobre o frame de origem do link.
    Domain,
    /// Restrição sobre o frame de destino do link.
    Range,
}

impl fmt::Display for ConstraintSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintSide::Domain => write!(f, "domínio"),
            ConstraintSide::Range => write!(f, "imagem"),
        }
    }
}

/// Erros emitidos pela T-Box e pelos mundos possíveis.
#[derive(Debug, Error)]
pub enum OntologyError {
    /// Nome já registrado na T-Box (ou mundo já presente na estrutura de Kripke).
    #[error("nome já registrado: {0}")]
    DuplicateName(String),

    /// A aresta ISA solicitada tornaria um conceito ancestral de si mesmo.
    #[error("hierarquia cíclica: {parent} já é descendente de {child}")]
    CyclicHierarchy {
        /// Conceito que receberia o novo pai.
        child: String,
        /// Pai proposto — já descendente de `child`.
        parent: String,
    },

    /// Relação filha não estreita a assinatura da relação mãe.
    #[error("relação {relation} não estreita o {side} da relação mãe {parent}")]
    DomainRangeNarrowing {
        /// Relação sendo registrada.
        relation: String,
        /// Relação mãe cuja assinatura foi violada.
        parent: String,
        /// Lado da assinatura violado.
        side: ConstraintSide,
    },

    /// Conceito não registrado na T-Box associada.
    #[error("conceito desconhecido: {0}")]
    UnknownConcept(String),

    /// Frame não pertence ao mundo consultado.
    #[error("frame desconhecido no mundo {world}: {frame}")]
    UnknownFrame {
        /// Nome do mundo consultado.
        world: String,
        /// Identificador do frame ausente.
        frame: String,
    },

    /// Link não pertence ao mundo consultado.
    #[error("link desconhecido no mundo {world}: {link}")]
    UnknownLink {
        /// Nome do mundo consultado.
        world: String,
        /// Identificador do link ausente.
        link: String,
    },

    /// Mundo ausente na estrutura de Kripke.
    #[error("mundo desconhecido: {0}")]
    UnknownWorld(String),

    /// Frame de origem ou destino viola a assinatura da relação do link.
    #[error(
        "frame {frame} (conceito {concept}) viola o {side} da relação {relation} (esperado: {expected})"
    )]
    TypeConstraintViolation {
        /// Rótulo do frame que violou a restrição.
        frame: String,
        /// Conceito declarado do frame.
        concept: String,
        /// Relação cuja assinatura foi violada.
        relation: String,
        /// Conceito exigido pela assinatura.
        expected: String,
        /// Lado violado (domínio ou imagem).
        side: ConstraintSide,
    },

    /// Consulta ou registro cruzou os estratos de conceitos e relações.
    #[error("tipos incompatíveis: {0}")]
    TypeMismatch(String),
}
