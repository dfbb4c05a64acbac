//! # Concept — Nó de Tipo na Hierarquia ISA
//!
//! Um [`Concept`] é a menor unidade da T-Box: um **tipo nomeado** com zero ou
//! mais conceitos pais (arestas ISA). A hierarquia admite **herança múltipla**
//! — um conceito pode especializar vários pais ao mesmo tempo.
//!
//! ## Analogia: O Verbete do Dicionário
//!
//! Pense na T-Box como um **dicionário de tipos**: cada conceito é um verbete
//! que remete aos verbetes mais gerais dos quais deriva. "Professor" remete a
//! "Funcionário", que remete a "Pessoa". A consulta ISA nada mais é do que
//! seguir essas remissões até (não) encontrar o verbete procurado.
//!
//! ## Campos Principais
//!
//! | Campo | Tipo | Descrição |
//! |-------|------|-----------|
//! | `id` | UUID | Identificador único gerado automaticamente |
//! | `name` | String | Nome único do conceito na T-Box (ex: "Pessoa") |
//! | `parents` | Vec<ConceptId> | Arestas ISA diretas, na ordem de declaração |
//! | `created_at` | DateTime<Utc> | Momento do registro na T-Box |
//!
//! ## Invariantes
//!
//! - O grafo de pais é **acíclico** — nenhum conceito é ancestral de si mesmo.
//! - Após a T-Box ser compartilhada (`Arc`), o conceito é **imutável**; os pais
//!   só podem ser estendidos via [`KripkeScale::add_parent`](super::KripkeScale::add_parent)
//!   enquanto a T-Box ainda é de posse exclusiva.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::KripkeScale;
//!
//! let mut scale = KripkeScale::new();
//! let pessoa = scale.register_concept("Pessoa", &[])?;
//! let aluno = scale.register_concept("Aluno", &[pessoa])?;
//!
//! assert!(scale.is_a(aluno, pessoa)?);
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Alias de tipo para o identificador de um [Concept].
///
/// Utiliza UUID v4 para garantir unicidade sem coordenação central.
pub type ConceptId = Uuid;

/// Nó de tipo nomeado na hierarquia ISA da T-Box.
///
/// Conceitos são criados exclusivamente pelo registro na
/// [`KripkeScale`](super::KripkeScale) — é lá que unicidade de nome,
/// existência dos pais e aciclicidade são garantidas. Fora da T-Box um
/// `Concept` circula apenas por referência ou por [`ConceptId`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Concept {
    /// Identificador único (UUID v4) — gerado automaticamente no registro.
    pub id: ConceptId,

    /// Nome único do conceito na T-Box. Preserva a capitalização declarada.
    pub name: String,

    /// Arestas ISA diretas, na ordem em que foram declaradas.
    ///
    /// Vazio para conceitos raiz. A ordem é preservada apenas para exibição;
    /// a consulta [`is_a`](super::KripkeScale::is_a) trata o conjunto como
    /// não ordenado.
    pub parents: Vec<ConceptId>,

    /// Timestamp do registro na T-Box.
    pub created_at: DateTime<Utc>,
}

impl Concept {
    /// Cria um novo conceito. Restrito à crate: só a
    /// [`KripkeScale`](super::KripkeScale) valida nome e pais antes de construir.
    pub(crate) fn new(name: impl Into<String>, parents: Vec<ConceptId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parents,
            created_at: Utc::now(),
        }
    }

    /// Retorna `true` se o conceito não especializa nenhum outro (raiz da hierarquia).
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Formatação legível no formato `Conceito[nome]`.
impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Conceito[{}]", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verifica que um conceito sem pais é raiz e um com pais não é
    #[test]
    fn test_is_root() {
        let pessoa = Concept::new("Pessoa", vec![]);
        assert!(pessoa.is_root());

        let aluno = Concept::new("Aluno", vec![pessoa.id]);
        assert!(!aluno.is_root());
        assert_eq!(aluno.parents, vec![pessoa.id]);
    }

    /// Verifica o formato de exibição `Conceito[nome]`
    #[test]
    fn test_display() {
        let c = Concept::new("Pessoa", vec![]);
        assert_eq!(c.to_string(), "Conceito[Pessoa]");
    }
}
