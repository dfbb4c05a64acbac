//! # KripkeScale — Registro Central da T-Box
//!
//! A [`KripkeScale`] é o **coração** da camada terminológica — o contêiner que
//! registra todos os conceitos e relações, mantém o índice por nome e responde
//! a consulta fundamental do motor: **"A é um tipo de B?"** ([`is_a`](KripkeScale::is_a)).
//!
//! ## Analogia: O Dicionário
//!
//! Se conceitos são verbetes e relações são verbetes com regência (quem pode
//! ser sujeito, quem pode ser objeto), a KripkeScale é o **dicionário
//! completo** — nada entra num mundo possível sem antes ter verbete aqui.
//!
//! ## Armazenamento
//!
//! - **Entradas**: `HashMap<ConceptId, ScaleEntry>` — busca O(1) por ID
//! - **Índice por nome**: `HashMap<String, ConceptId>` — unicidade + busca O(1)
//! - **Cache ISA**: `RwLock<HashMap<(ConceptId, ConceptId), bool>>` — memoização
//!   das consultas de fecho transitivo
//!
//! O cache é transiente e **não é serializado** (`#[serde(skip)]`). Como a
//! hierarquia fica imutável depois que a T-Box é compartilhada via `Arc`,
//! cada par (A, B) só precisa ser percorrido uma vez.
//!
//! ## Ciclo de Vida: Construção → Congelamento
//!
//! ```text
//! let mut scale = KripkeScale::new();     // fase de construção (&mut)
//! scale.register_concept(...)?;           //   registros e add_parent
//! let scale = Arc::new(scale);            // congelamento por posse
//! PossibleWorld::new("Semestre 1", scale) //   só consultas (&self) daqui em diante
//! ```
//!
//! O congelamento não é uma flag em runtime: toda mutação exige `&mut self`,
//! e um `Arc` compartilhado só empresta `&self`. Mundos concorrentes podem
//! consultar a mesma T-Box sem sincronização adicional.

use std::collections::{HashMap, HashSet, VecDeque};

use parking_lot::RwLock;
use serde::Serialize;

use super::concept::{Concept, ConceptId};
use super::error::{ConstraintSide, OntologyError, Result};
use super::relation::Relation;

/// Entrada registrada na T-Box: um conceito simples ou uma relação.
///
/// Os dois estratos compartilham o mesmo espaço de nomes e o mesmo grafo ISA,
/// mas arestas nunca cruzam de um estrato para o outro.
#[derive(Clone, Debug, Serialize)]
pub enum ScaleEntry {
    /// Conceito simples — tipo declarado de [`Frame`](crate::world::Frame)s.
    Concept(Concept),
    /// Relação — tipo declarado de [`Link`](crate::world::Link)s.
    Relation(Relation),
}

impl ScaleEntry {
    /// Visão do conceito base da entrada (identidade, nome, pais).
    pub fn base(&self) -> &Concept {
        match self {
            ScaleEntry::Concept(c) => c,
            ScaleEntry::Relation(r) => &r.concept,
        }
    }

    fn base_mut(&mut self) -> &mut Concept {
        match self {
            ScaleEntry::Concept(c) => c,
            ScaleEntry::Relation(r) => &mut r.concept,
        }
    }

    /// Retorna `true` se a entrada é uma relação.
    pub fn is_relation(&self) -> bool {
        matches!(self, ScaleEntry::Relation(_))
    }

    /// Visão da relação, se a entrada for uma.
    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            ScaleEntry::Relation(r) => Some(r),
            ScaleEntry::Concept(_) => None,
        }
    }
}

/// Registro central da T-Box — contêiner de [Concept]s e [Relation]s.
///
/// Todas as operações de registro e consulta de tipos passam por esta struct.
/// Depois de construída, ela é compartilhada com os mundos via
/// `Arc<KripkeScale>` — leitura concorrente segura, escrita impossível.
#[derive(Serialize)]
pub struct KripkeScale {
    /// Mapa de entradas: ID → conceito ou relação.
    entries: HashMap<ConceptId, ScaleEntry>,

    /// Índice por nome: nome exato → ID. Garante unicidade de nomes.
    by_name: HashMap<String, ConceptId>,

    /// Cache de consultas ISA: (descendente, ancestral) → resultado.
    ///
    /// **Não serializado** — memoização pura, reconstruída sob demanda.
    /// Invalidado por [`add_parent`](KripkeScale::add_parent), a única
    /// mutação possível depois de um registro.
    #[serde(skip)]
    isa_cache: RwLock<HashMap<(ConceptId, ConceptId), bool>>,
}

impl KripkeScale {
    /// Cria uma T-Box vazia.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            by_name: HashMap::new(),
            isa_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Registra um conceito simples e retorna seu [ConceptId].
    ///
    /// # Erros
    ///
    /// - [`OntologyError::DuplicateName`] — o nome já tem verbete na T-Box
    /// - [`OntologyError::UnknownConcept`] — algum pai não está registrado
    /// - [`OntologyError::TypeMismatch`] — algum pai é uma relação (os estratos
    ///   de conceitos e relações nunca se cruzam)
    ///
    /// Ciclos são impossíveis neste caminho: os pais precisam existir antes do
    /// filho, logo nenhum pai pode descender dele. A detecção de ciclo vive em
    /// [`add_parent`](KripkeScale::add_parent), onde arestas tardias são aceitas.
    pub fn register_concept(&mut self, name: &str, parents: &[ConceptId]) -> Result<ConceptId> {
        self.ensure_name_free(name)?;
        for &parent in parents {
            let entry = self.get(parent)?;
            if entry.is_relation() {
                return Err(OntologyError::TypeMismatch(format!(
                    "pai de conceito deve ser conceito simples: {}",
                    entry.base().name
                )));
            }
        }

        let concept = Concept::new(name, parents.to_vec());
        let id = concept.id;
        tracing::debug!(id = %id, name = %name, "T-Box: conceito registrado");
        self.by_name.insert(name.to_string(), id);
        self.entries.insert(id, ScaleEntry::Concept(concept));
        Ok(id)
    }

    /// Registra uma relação com assinatura domínio/imagem e retorna seu [ConceptId].
    ///
    /// Valida, além dos pais, a regra de **estreitamento de assinatura**: o
    /// domínio da nova relação precisa ser `is_a` do domínio de cada relação
    /// mãe, e o mesmo para a imagem.
    ///
    /// # Erros
    ///
    /// - [`OntologyError::DuplicateName`] — nome já registrado
    /// - [`OntologyError::UnknownConcept`] — domínio, imagem ou pai ausente
    /// - [`OntologyError::TypeMismatch`] — algum pai não é relação
    /// - [`OntologyError::DomainRangeNarrowing`] — assinatura mais larga que a da mãe
    pub fn register_relation(
        &mut self,
        name: &str,
        domain: ConceptId,
        range: ConceptId,
        parents: &[ConceptId],
    ) -> Result<ConceptId> {
        self.ensure_name_free(name)?;
        self.get(domain)?;
        self.get(range)?;
        for &parent in parents {
            self.check_narrowing(name, domain, range, parent)?;
        }

        let relation = Relation::new(name, domain, range, parents.to_vec());
        let id = relation.id();
        tracing::debug!(
            id = %id,
            name = %name,
            domain = %self.name_of(domain),
            range = %self.name_of(range),
            "T-Box: relação registrada"
        );
        self.by_name.insert(name.to_string(), id);
        self.entries.insert(id, ScaleEntry::Relation(relation));
        Ok(id)
    }

    /// Acrescenta uma aresta ISA tardia a um conceito ou relação já registrado.
    ///
    /// Só é possível enquanto a T-Box ainda é de posse exclusiva (`&mut self`)
    /// — depois do `Arc::new` a hierarquia está congelada. A aresta duplicada
    /// é idempotente. O cache ISA é invalidado.
    ///
    /// # Erros
    ///
    /// - [`OntologyError::UnknownConcept`] — filho ou pai ausente
    /// - [`OntologyError::TypeMismatch`] — aresta cruzaria os estratos
    /// - [`OntologyError::CyclicHierarchy`] — o pai já descende do filho
    ///   (inclui o caso reflexivo filho == pai)
    /// - [`OntologyError::DomainRangeNarrowing`] — entre relações, a assinatura
    ///   do filho não estreita a do novo pai
    pub fn add_parent(&mut self, child: ConceptId, parent: ConceptId) -> Result<()> {
        let child_is_relation = self.get(child)?.is_relation();
        let parent_is_relation = self.get(parent)?.is_relation();
        if child_is_relation != parent_is_relation {
            return Err(OntologyError::TypeMismatch(format!(
                "aresta ISA entre estratos distintos: {} e {}",
                self.name_of(child),
                self.name_of(parent)
            )));
        }
        if child == parent || self.is_a(parent, child)? {
            return Err(OntologyError::CyclicHierarchy {
                child: self.name_of(child),
                parent: self.name_of(parent),
            });
        }
        if child_is_relation {
            let (domain, range) = {
                let r = self.relation(child)?;
                (r.domain, r.range)
            };
            self.check_narrowing(&self.name_of(child), domain, range, parent)?;
        }

        if let Some(entry) = self.entries.get_mut(&child) {
            let base = entry.base_mut();
            if !base.parents.contains(&parent) {
                base.parents.push(parent);
            }
        }
        // Hierarquia mudou: todo resultado memoizado fica suspeito
        self.isa_cache.get_mut().clear();
        tracing::debug!(
            child = %self.name_of(child),
            parent = %self.name_of(parent),
            "T-Box: aresta ISA acrescentada"
        );
        Ok(())
    }

    /// Consulta o fecho reflexivo-transitivo: **A é um tipo de B?**
    ///
    /// `true` sse B é igual a A ou alcançável a partir de A seguindo arestas
    /// de pai. A busca é em largura sobre o grafo de pais e o resultado é
    /// memoizado — a hierarquia é imutável depois do congelamento, então cada
    /// par só é percorrido uma vez.
    ///
    /// # Erros
    ///
    /// [`OntologyError::UnknownConcept`] se A ou B não têm verbete na T-Box.
    ///
    /// # Exemplo
    ///
    /// ```rust
    /// // Professor ISA Funcionário ISA Pessoa
    /// assert!(scale.is_a(professor, pessoa)?);
    /// assert!(scale.is_a(pessoa, pessoa)?);   // reflexivo
    /// assert!(!scale.is_a(pessoa, professor)?); // pai não é filho
    /// ```
    pub fn is_a(&self, a: ConceptId, b: ConceptId) -> Result<bool> {
        self.get(a)?;
        self.get(b)?;
        if a == b {
            return Ok(true);
        }
        if let Some(&hit) = self.isa_cache.read().get(&(a, b)) {
            return Ok(hit);
        }

        let mut visited: HashSet<ConceptId> = HashSet::new();
        let mut queue: VecDeque<ConceptId> = VecDeque::from([a]);
        let mut found = false;
        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            if current == b {
                found = true;
                break;
            }
            if let Some(entry) = self.entries.get(&current) {
                queue.extend(entry.base().parents.iter().copied());
            }
        }

        self.isa_cache.write().insert((a, b), found);
        Ok(found)
    }

    /// Busca uma entrada pelo ID.
    ///
    /// # Erros
    ///
    /// [`OntologyError::UnknownConcept`] se o ID não está registrado.
    pub fn get(&self, id: ConceptId) -> Result<&ScaleEntry> {
        self.entries
            .get(&id)
            .ok_or_else(|| OntologyError::UnknownConcept(id.to_string()))
    }

    /// Visão do conceito base de uma entrada (conceito simples ou relação).
    pub fn concept(&self, id: ConceptId) -> Result<&Concept> {
        Ok(self.get(id)?.base())
    }

    /// Visão de relação de uma entrada.
    ///
    /// # Erros
    ///
    /// - [`OntologyError::UnknownConcept`] — ID ausente
    /// - [`OntologyError::TypeMismatch`] — a entrada é um conceito simples
    pub fn relation(&self, id: ConceptId) -> Result<&Relation> {
        let entry = self.get(id)?;
        entry.as_relation().ok_or_else(|| {
            OntologyError::TypeMismatch(format!("{} não é uma relação", entry.base().name))
        })
    }

    /// Busca entrada por nome exato.
    pub fn find_by_name(&self, name: &str) -> Option<&ScaleEntry> {
        self.by_name.get(name).and_then(|id| self.entries.get(id))
    }

    /// Nome legível de um ID — cai para o próprio UUID se o ID não tiver verbete.
    ///
    /// Usado na construção de mensagens de erro e logs; nunca falha.
    pub fn name_of(&self, id: ConceptId) -> String {
        self.entries
            .get(&id)
            .map(|e| e.base().name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Descrição legível de uma relação com assinatura resolvida.
    ///
    /// # Exemplo de Saída
    ///
    /// ```text
    /// Relação[Mentoria: Funcionário → Aluno]
    /// ```
    pub fn describe_relation(&self, id: ConceptId) -> Result<String> {
        let relation = self.relation(id)?;
        Ok(format!(
            "Relação[{}: {} → {}]",
            relation.name(),
            self.name_of(relation.domain),
            self.name_of(relation.range)
        ))
    }

    /// Número de conceitos simples registrados.
    pub fn concept_count(&self) -> usize {
        self.entries.values().filter(|e| !e.is_relation()).count()
    }

    /// Número de relações registradas.
    pub fn relation_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_relation()).count()
    }

    /// Falha com [`OntologyError::DuplicateName`] se o nome já tem verbete.
    fn ensure_name_free(&self, name: &str) -> Result<()> {
        if self.by_name.contains_key(name) {
            return Err(OntologyError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Valida o estreitamento de assinatura de `(domain, range)` contra a
    /// relação mãe `parent`. Também rejeita pais que não sejam relações.
    fn check_narrowing(
        &self,
        name: &str,
        domain: ConceptId,
        range: ConceptId,
        parent: ConceptId,
    ) -> Result<()> {
        let (parent_name, parent_domain, parent_range) = {
            let p = self.relation(parent)?;
            (p.name().to_string(), p.domain, p.range)
        };
        if !self.is_a(domain, parent_domain)? {
            return Err(OntologyError::DomainRangeNarrowing {
                relation: name.to_string(),
                parent: parent_name,
                side: ConstraintSide::Domain,
            });
        }
        if !self.is_a(range, parent_range)? {
            return Err(OntologyError::DomainRangeNarrowing {
                relation: name.to_string(),
                parent: parent_name,
                side: ConstraintSide::Range,
            });
        }
        Ok(())
    }
}

impl Default for KripkeScale {
    fn default() -> Self {
        Self::new()
    }
}
