//! # Módulo World — A Camada Assertiva (A-Box)
//!
//! Este módulo contém as **instâncias**: tudo o que afirma como um estado de
//! coisas concreto se parece, usando o vocabulário registrado na
//! [`KripkeScale`](crate::core::KripkeScale):
//!
//! - [`Frame`] — instância de um conceito (ex: "Bob" como Professor)
//! - [`Link`] — instância de uma relação, ligando dois frames
//! - [`PossibleWorld`] — uma fotografia: frames e links de um estado ("Semestre 1")
//! - [`KripkeStructure`] — mundos ligados por acessibilidade, com consulta modal
//!
//! Cada mundo é independente; vários mundos compartilham a mesma T-Box
//! congelada via `Arc` e nunca escrevem nela.

/// Sub-módulo com a implementação de [`Frame`] e o alias [`FrameId`].
pub mod frame;

/// Sub-módulo com a implementação de [`KripkeStructure`].
pub mod kripke;

/// Sub-módulo com a implementação de [`Link`] e o alias [`LinkId`].
pub mod link;

/// Sub-módulo com a implementação de [`PossibleWorld`].
pub mod possible_world;

// Re-exports para conveniência — permite usar `crate::world::PossibleWorld` diretamente.
pub use frame::{Frame, FrameId};
pub use kripke::KripkeStructure;
pub use link::{Link, LinkId};
pub use possible_world::PossibleWorld;
