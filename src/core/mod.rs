//! # Módulo Core — A Camada Terminológica (T-Box)
//!
//! Este módulo agrupa os **tipos fundamentais** do motor ontológico — o
//! vocabulário sobre o qual os mundos possíveis são montados:
//!
//! - [`Concept`] — nó de tipo nomeado com arestas ISA (herança múltipla)
//! - [`Relation`] — conceito especializado com assinatura domínio/imagem
//! - [`KripkeScale`] — registro central da T-Box; responde "A é um tipo de B?"
//! - [`OntologyError`] — taxonomia de erros do motor
//!
//! ## T-Box vs A-Box
//!
//! A separação clássica de representação de conhecimento:
//!
//! | Camada | Módulo | Conteúdo |
//! |--------|--------|----------|
//! | T-Box (terminológica) | `core` | conceitos, relações, hierarquia ISA |
//! | A-Box (assertiva) | [`world`](crate::world) | frames, links, mundos possíveis |
//!
//! A T-Box é construída uma única vez e congelada por posse (`Arc`); os
//! mundos apenas a consultam.

/// Sub-módulo com a implementação de [`Concept`] e o alias [`ConceptId`].
pub mod concept;

/// Sub-módulo com a taxonomia de erros e o alias `Result` da crate.
pub mod error;

/// Sub-módulo com a implementação de [`Relation`].
pub mod relation;

/// Sub-módulo com a implementação de [`KripkeScale`] — registro da T-Box.
pub mod scale;

// Re-exports para conveniência — permite usar `crate::core::KripkeScale` diretamente.
pub use concept::{Concept, ConceptId};
pub use error::{ConstraintSide, OntologyError, Result};
pub use relation::Relation;
pub use scale::{KripkeScale, ScaleEntry};
