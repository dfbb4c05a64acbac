//! # Relation — Conceito com Assinatura Domínio/Imagem
//!
//! Uma [`Relation`] é um [`Concept`] especializado: além de nome e pais, carrega
//! uma **assinatura** — o conceito exigido do frame de origem (**domínio**) e o
//! conceito exigido do frame de destino (**imagem**). É o tipo declarado dos
//! [`Link`](crate::world::Link)s, assim como conceitos são o tipo declarado dos
//! [`Frame`](crate::world::Frame)s.
//!
//! ## Estreitamento de Assinatura
//!
//! Relações formam sua própria hierarquia ISA, paralela à de conceitos.
//! Uma relação filha deve **estreitar** (ou manter) a assinatura da mãe:
//!
//! ```text
//! Interação:  domínio = Pessoa,      imagem = Pessoa
//! Mentoria:   domínio = Funcionário, imagem = Aluno     (ISA Interação ✓)
//! ```
//!
//! A regra é validada no registro — ver
//! [`KripkeScale::register_relation`](super::KripkeScale::register_relation).

use serde::{Deserialize, Serialize};

use super::concept::{Concept, ConceptId};

/// Conceito especializado com assinatura domínio/imagem.
///
/// A composição é literal: `Relation` **contém** o [`Concept`] base (id, nome,
/// pais, timestamp) e acrescenta os dois lados da assinatura. As arestas ISA
/// de uma relação vivem em `concept.parents` e apontam sempre para outras
/// relações — os estratos de conceitos e relações nunca se cruzam.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Relation {
    /// Conceito base — identidade, nome e arestas ISA da relação.
    pub concept: Concept,

    /// Conceito exigido do frame de **origem** de um link desta relação.
    pub domain: ConceptId,

    /// Conceito exigido do frame de **destino** de um link desta relação.
    pub range: ConceptId,
}

impl Relation {
    /// Cria uma nova relação. Restrito à crate: só a
    /// [`KripkeScale`](super::KripkeScale) valida assinatura e pais antes de construir.
    pub(crate) fn new(
        name: impl Into<String>,
        domain: ConceptId,
        range: ConceptId,
        parents: Vec<ConceptId>,
    ) -> Self {
        Self {
            concept: Concept::new(name, parents),
            domain,
            range,
        }
    }

    /// Identificador da relação (o mesmo do conceito base).
    pub fn id(&self) -> ConceptId {
        self.concept.id
    }

    /// Nome da relação (o mesmo do conceito base).
    pub fn name(&self) -> &str {
        &self.concept.name
    }
}
