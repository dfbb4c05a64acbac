//! # PossibleWorld — A Caixa Assertiva (A-Box)
//!
//! Um [`PossibleWorld`] é uma **fotografia**: o retrato de um estado de coisas
//! ("Semestre 1") povoado por [`Frame`]s e [`Link`]s cujos tipos declarados
//! têm verbete na T-Box associada. Vários mundos podem compartilhar a mesma
//! [`KripkeScale`] congelada — cada um é um retrato independente tirado com o
//! mesmo vocabulário.
//!
//! ## Fábricas, não inserções
//!
//! Frames e links **só nascem pelas fábricas do mundo**
//! ([`create_frame`](PossibleWorld::create_frame) /
//! [`create_link`](PossibleWorld::create_link)), que validam tudo uma única
//! vez na criação:
//!
//! | Validação | Operação | Erro |
//! |-----------|----------|------|
//! | Tipo declarado tem verbete | `create_frame` | `UnknownConcept` |
//! | Tipo declarado é relação | `create_link` | `TypeMismatch` |
//! | Pontas pertencem ao mundo | `create_link` | `UnknownFrame` |
//! | Origem satisfaz o domínio | `create_link` | `TypeConstraintViolation` |
//! | Destino satisfaz a imagem | `create_link` | `TypeConstraintViolation` |
//!
//! Depois de criada, a instância é imutável — consultas nunca revalidam.
//!
//! ## Consultas
//!
//! - [`frame_instance_of`](PossibleWorld::frame_instance_of) — "este frame é um X?"
//! - [`link_instance_of`](PossibleWorld::link_instance_of) — "este link é um R?"
//! - [`extension`](PossibleWorld::extension) — "quem são os X deste mundo?"
//!
//! Todas delegam o trabalho de hierarquia ao
//! [`is_a`](crate::core::KripkeScale::is_a) da T-Box: a consulta parte do tipo
//! declarado da instância e sobe as arestas ISA.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use std::sync::Arc;
//! use crate::core::KripkeScale;
//! use crate::world::PossibleWorld;
//!
//! let mut scale = KripkeScale::new();
//! let pessoa = scale.register_concept("Pessoa", &[])?;
//! let professor = scale.register_concept("Professor", &[pessoa])?;
//!
//! let mut mundo = PossibleWorld::new("Semestre 1", Arc::new(scale));
//! let bob = mundo.create_frame("Bob", professor)?;
//! assert!(mundo.frame_instance_of(bob, pessoa)?);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::core::{ConceptId, ConstraintSide, KripkeScale, OntologyError, Result};

use super::frame::{Frame, FrameId};
use super::link::{Link, LinkId};

/// Fotografia de um estado de coisas: frames e links sobre uma T-Box congelada.
#[derive(Serialize)]
pub struct PossibleWorld {
    /// Nome do mundo (ex: "Semestre 1").
    pub name: String,

    /// T-Box compartilhada — somente leitura; vários mundos podem apontar
    /// para a mesma instância.
    #[serde(skip)]
    scale: Arc<KripkeScale>,

    /// Mapa de frames: ID → Frame.
    frames: HashMap<FrameId, Frame>,

    /// Mapa de links: ID → Link.
    links: HashMap<LinkId, Link>,

    /// Índice reverso: frame_id → IDs dos links que tocam este frame.
    ///
    /// **Não serializado** — mantido incrementalmente por
    /// [`create_link`](PossibleWorld::create_link).
    #[serde(skip)]
    frame_links: HashMap<FrameId, Vec<LinkId>>,
}

impl PossibleWorld {
    /// Cria um mundo vazio associado a uma T-Box congelada.
    pub fn new(name: impl Into<String>, scale: Arc<KripkeScale>) -> Self {
        Self {
            name: name.into(),
            scale,
            frames: HashMap::new(),
            links: HashMap::new(),
            frame_links: HashMap::new(),
        }
    }

    /// T-Box associada a este mundo.
    pub fn scale(&self) -> &KripkeScale {
        &self.scale
    }

    /// Cria um frame etiquetado com um conceito declarado e retorna seu [FrameId].
    ///
    /// # Erros
    ///
    /// [`OntologyError::UnknownConcept`] se o conceito não tem verbete na
    /// T-Box associada.
    pub fn create_frame(&mut self, label: &str, concept: ConceptId) -> Result<FrameId> {
        self.scale.get(concept)?;
        let frame = Frame::new(label, concept);
        let id = frame.id;
        tracing::debug!(
            world = %self.name,
            label = %label,
            concept = %self.scale.name_of(concept),
            "Mundo: frame criado"
        );
        self.frames.insert(id, frame);
        Ok(id)
    }

    /// Cria um link entre dois frames deste mundo e retorna seu [LinkId].
    ///
    /// Valida a assinatura da relação: o conceito declarado da origem precisa
    /// ser `is_a` do domínio, e o do destino, `is_a` da imagem.
    ///
    /// # Erros
    ///
    /// - [`OntologyError::UnknownConcept`] — relação sem verbete na T-Box
    /// - [`OntologyError::TypeMismatch`] — o tipo dado é conceito simples
    /// - [`OntologyError::UnknownFrame`] — origem ou destino não pertence a este mundo
    /// - [`OntologyError::TypeConstraintViolation`] — assinatura violada; o erro
    ///   nomeia o frame, o lado (domínio/imagem) e o conceito esperado
    pub fn create_link(
        &mut self,
        relation: ConceptId,
        source: FrameId,
        target: FrameId,
    ) -> Result<LinkId> {
        let (relation_name, domain, range) = {
            let r = self.scale.relation(relation)?;
            (r.name().to_string(), r.domain, r.range)
        };
        let source_frame = self.frame(source)?;
        let target_frame = self.frame(target)?;

        self.check_signature(source_frame, domain, &relation_name, ConstraintSide::Domain)?;
        self.check_signature(target_frame, range, &relation_name, ConstraintSide::Range)?;

        let link = Link::new(relation, source, target);
        let id = link.id;
        tracing::debug!(
            world = %self.name,
            relation = %relation_name,
            source = %source_frame.label,
            target = %target_frame.label,
            "Mundo: link criado"
        );
        // Índice reverso para as duas pontas
        self.frame_links.entry(source).or_default().push(id);
        self.frame_links.entry(target).or_default().push(id);
        self.links.insert(id, link);
        Ok(id)
    }

    /// Busca um frame pelo ID.
    ///
    /// # Erros
    ///
    /// [`OntologyError::UnknownFrame`] se o frame não pertence a este mundo.
    pub fn frame(&self, id: FrameId) -> Result<&Frame> {
        self.frames.get(&id).ok_or_else(|| OntologyError::UnknownFrame {
            world: self.name.clone(),
            frame: id.to_string(),
        })
    }

    /// Busca um link pelo ID.
    ///
    /// # Erros
    ///
    /// [`OntologyError::UnknownLink`] se o link não pertence a este mundo.
    pub fn link(&self, id: LinkId) -> Result<&Link> {
        self.links.get(&id).ok_or_else(|| OntologyError::UnknownLink {
            world: self.name.clone(),
            link: id.to_string(),
        })
    }

    /// Consulta: **o frame é uma instância do conceito?**
    ///
    /// Parte do conceito declarado do frame e sobe a hierarquia via
    /// [`is_a`](KripkeScale::is_a) — inclui o caso reflexivo (o frame é
    /// instância do próprio conceito declarado).
    ///
    /// # Erros
    ///
    /// - [`OntologyError::UnknownFrame`] — frame não pertence a este mundo
    /// - [`OntologyError::UnknownConcept`] — conceito sem verbete na T-Box
    /// - [`OntologyError::TypeMismatch`] — frame consultado contra uma relação
    pub fn frame_instance_of(&self, frame: FrameId, concept: ConceptId) -> Result<bool> {
        let frame = self.frame(frame)?;
        let entry = self.scale.get(concept)?;
        if entry.is_relation() {
            return Err(OntologyError::TypeMismatch(format!(
                "frame consultado contra relação: {}",
                entry.base().name
            )));
        }
        self.scale.is_a(frame.concept, concept)
    }

    /// Consulta: **o link é uma instância da relação?**
    ///
    /// Parte da relação declarada do link e sobe a hierarquia de relações.
    ///
    /// # Erros
    ///
    /// - [`OntologyError::UnknownLink`] — link não pertence a este mundo
    /// - [`OntologyError::UnknownConcept`] — relação sem verbete na T-Box
    /// - [`OntologyError::TypeMismatch`] — link consultado contra conceito simples
    pub fn link_instance_of(&self, link: LinkId, relation: ConceptId) -> Result<bool> {
        let link = self.link(link)?;
        let entry = self.scale.get(relation)?;
        if !entry.is_relation() {
            return Err(OntologyError::TypeMismatch(format!(
                "link consultado contra conceito simples: {}",
                entry.base().name
            )));
        }
        self.scale.is_a(link.relation, relation)
    }

    /// Extensão de um conceito neste mundo: todos os frames que são instância dele.
    ///
    /// O resultado vem ordenado por rótulo, para saída determinística.
    ///
    /// # Erros
    ///
    /// Os mesmos de [`frame_instance_of`](PossibleWorld::frame_instance_of),
    /// exceto `UnknownFrame`.
    pub fn extension(&self, concept: ConceptId) -> Result<Vec<&Frame>> {
        let entry = self.scale.get(concept)?;
        if entry.is_relation() {
            return Err(OntologyError::TypeMismatch(format!(
                "extensão consultada para relação: {}",
                entry.base().name
            )));
        }
        let mut members = Vec::new();
        for frame in self.frames.values() {
            if self.scale.is_a(frame.concept, concept)? {
                members.push(frame);
            }
        }
        members.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(members)
    }

    /// Retorna todos os links que tocam um frame (como origem ou destino).
    ///
    /// Utiliza o índice reverso `frame_links` — O(k) no número de links do
    /// frame. Frame desconhecido resulta em lista vazia.
    pub fn links_for_frame(&self, frame: FrameId) -> Vec<&Link> {
        self.frame_links
            .get(&frame)
            .map(|ids| ids.iter().filter_map(|id| self.links.get(id)).collect())
            .unwrap_or_default()
    }

    /// Gera uma descrição legível de um link, com rótulos e tipos resolvidos.
    ///
    /// # Exemplo de Saída
    ///
    /// ```text
    /// [Bob:Professor] ─Mentoria→ [Alice:Aluno]
    /// ```
    pub fn describe_link(&self, link: &Link) -> String {
        let side = |id: FrameId| -> String {
            self.frames
                .get(&id)
                .map(|f| format!("{}:{}", f.label, self.scale.name_of(f.concept)))
                .unwrap_or_else(|| "?".to_string())
        };
        format!(
            "[{}] ─{}→ [{}]",
            side(link.source),
            self.scale.name_of(link.relation),
            side(link.target)
        )
    }

    /// Itera sobre os frames do mundo, sem ordem definida.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.values()
    }

    /// Itera sobre os links do mundo, sem ordem definida.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// Retorna o número total de frames no mundo.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Retorna o número total de links no mundo.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Valida um lado da assinatura de uma relação contra um frame.
    fn check_signature(
        &self,
        frame: &Frame,
        expected: ConceptId,
        relation: &str,
        side: ConstraintSide,
    ) -> Result<()> {
        if !self.scale.is_a(frame.concept, expected)? {
            return Err(OntologyError::TypeConstraintViolation {
                frame: frame.label.clone(),
                concept: self.scale.name_of(frame.concept),
                relation: relation.to_string(),
                expected: self.scale.name_of(expected),
                side,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// T-Box acadêmica congelada, compartilhável entre mundos de teste.
    fn university() -> (Arc<KripkeScale>, [ConceptId; 6]) {
        let mut scale = KripkeScale::new();
        let pessoa = scale.register_concept("Pessoa", &[]).unwrap();
        let aluno = scale.register_concept("Aluno", &[pessoa]).unwrap();
        let funcionario = scale.register_concept("Funcionário", &[pessoa]).unwrap();
        let professor = scale.register_concept("Professor", &[funcionario]).unwrap();
        let interacao = scale
            .register_relation("Interação", pessoa, pessoa, &[])
            .unwrap();
        let mentoria = scale
            .register_relation("Mentoria", funcionario, aluno, &[interacao])
            .unwrap();
        (
            Arc::new(scale),
            [pessoa, aluno, funcionario, professor, interacao, mentoria],
        )
    }

    /// Verifica o cenário acadêmico completo: Bob (Professor) mentora
    /// Alice (Aluno); Bob é Pessoa; o link de Mentoria é uma Interação
    #[test]
    fn test_mentoring_scenario() {
        let (scale, [pessoa, aluno, _, professor, interacao, mentoria]) = university();
        let mut mundo = PossibleWorld::new("Semestre 1", scale);

        let bob = mundo.create_frame("Bob", professor).unwrap();
        let alice = mundo.create_frame("Alice", aluno).unwrap();
        let link = mundo.create_link(mentoria, bob, alice).unwrap();

        assert!(mundo.frame_instance_of(bob, pessoa).unwrap());
        assert!(mundo.frame_instance_of(alice, pessoa).unwrap());
        assert!(!mundo.frame_instance_of(bob, aluno).unwrap());
        assert!(mundo.link_instance_of(link, mentoria).unwrap());
        assert!(mundo.link_instance_of(link, interacao).unwrap());
        assert_eq!(mundo.frame_count(), 2);
        assert_eq!(mundo.link_count(), 1);
    }

    /// Verifica que criar frame com conceito sem verbete falha
    #[test]
    fn test_create_frame_unknown_concept_fails() {
        let (scale, _) = university();
        let mut mundo = PossibleWorld::new("Vazio", scale);
        let ghost = uuid::Uuid::new_v4();
        assert!(matches!(
            mundo.create_frame("Fantasma", ghost).unwrap_err(),
            OntologyError::UnknownConcept(_)
        ));
    }

    /// Verifica que link com domínio/imagem invertidos falha com
    /// TypeConstraintViolation apontando o lado do domínio
    #[test]
    fn test_link_reversed_signature_fails() {
        let (scale, [_, aluno, _, professor, _, mentoria]) = university();
        let mut mundo = PossibleWorld::new("Semestre 1", scale);
        let bob = mundo.create_frame("Bob", professor).unwrap();
        let alice = mundo.create_frame("Alice", aluno).unwrap();

        // origem Aluno não satisfaz o domínio Funcionário
        let err = mundo.create_link(mentoria, alice, bob).unwrap_err();
        assert!(matches!(
            err,
            OntologyError::TypeConstraintViolation {
                side: ConstraintSide::Domain,
                ..
            }
        ));
        assert_eq!(mundo.link_count(), 0);
    }

    /// Verifica que destino fora da imagem falha apontando o lado da imagem
    #[test]
    fn test_link_range_violation_fails() {
        let (scale, [_, _, funcionario, professor, _, mentoria]) = university();
        let mut mundo = PossibleWorld::new("Semestre 1", scale);
        let bob = mundo.create_frame("Bob", professor).unwrap();
        let carla = mundo.create_frame("Carla", funcionario).unwrap();

        // destino Funcionário não satisfaz a imagem Aluno
        let err = mundo.create_link(mentoria, bob, carla).unwrap_err();
        assert!(matches!(
            err,
            OntologyError::TypeConstraintViolation {
                side: ConstraintSide::Range,
                ..
            }
        ));
    }

    /// Verifica que pontas de outro mundo falham com UnknownFrame
    #[test]
    fn test_link_foreign_frame_fails() {
        let (scale, [_, aluno, _, professor, _, mentoria]) = university();
        let mut sem1 = PossibleWorld::new("Semestre 1", scale.clone());
        let mut sem2 = PossibleWorld::new("Semestre 2", scale);
        let bob = sem1.create_frame("Bob", professor).unwrap();
        let alice = sem2.create_frame("Alice", aluno).unwrap();

        let err = sem1.create_link(mentoria, bob, alice).unwrap_err();
        assert!(matches!(err, OntologyError::UnknownFrame { .. }));
    }

    /// Verifica que consultar frame contra relação (e link contra conceito)
    /// falha com TypeMismatch
    #[test]
    fn test_instance_of_cross_strata_fails() {
        let (scale, [pessoa, aluno, _, professor, _, mentoria]) = university();
        let mut mundo = PossibleWorld::new("Semestre 1", scale);
        let bob = mundo.create_frame("Bob", professor).unwrap();
        let alice = mundo.create_frame("Alice", aluno).unwrap();
        let link = mundo.create_link(mentoria, bob, alice).unwrap();

        assert!(matches!(
            mundo.frame_instance_of(bob, mentoria).unwrap_err(),
            OntologyError::TypeMismatch(_)
        ));
        assert!(matches!(
            mundo.link_instance_of(link, pessoa).unwrap_err(),
            OntologyError::TypeMismatch(_)
        ));
    }

    /// Verifica a extensão de um conceito: instâncias diretas e por herança,
    /// ordenadas por rótulo
    #[test]
    fn test_extension() {
        let (scale, [pessoa, aluno, _, professor, _, _]) = university();
        let mut mundo = PossibleWorld::new("Semestre 1", scale);
        mundo.create_frame("Bob", professor).unwrap();
        mundo.create_frame("Diana", aluno).unwrap();
        mundo.create_frame("Alice", aluno).unwrap();

        let alunos = mundo.extension(aluno).unwrap();
        let labels: Vec<&str> = alunos.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Alice", "Diana"]);

        let pessoas = mundo.extension(pessoa).unwrap();
        assert_eq!(pessoas.len(), 3);
    }

    /// Verifica o índice reverso de links por frame
    #[test]
    fn test_links_for_frame() {
        let (scale, [_, aluno, _, professor, _, mentoria]) = university();
        let mut mundo = PossibleWorld::new("Semestre 1", scale);
        let bob = mundo.create_frame("Bob", professor).unwrap();
        let alice = mundo.create_frame("Alice", aluno).unwrap();
        let diana = mundo.create_frame("Diana", aluno).unwrap();
        let l1 = mundo.create_link(mentoria, bob, alice).unwrap();
        let l2 = mundo.create_link(mentoria, bob, diana).unwrap();

        let de_bob: Vec<LinkId> = mundo.links_for_frame(bob).iter().map(|l| l.id).collect();
        assert_eq!(de_bob.len(), 2);
        assert!(de_bob.contains(&l1) && de_bob.contains(&l2));
        assert_eq!(mundo.links_for_frame(alice).len(), 1);
    }

    /// Verifica a descrição legível de um link com tipos resolvidos
    #[test]
    fn test_describe_link() {
        let (scale, [_, aluno, _, professor, _, mentoria]) = university();
        let mut mundo = PossibleWorld::new("Semestre 1", scale);
        let bob = mundo.create_frame("Bob", professor).unwrap();
        let alice = mundo.create_frame("Alice", aluno).unwrap();
        let id = mundo.create_link(mentoria, bob, alice).unwrap();

        let link = mundo.link(id).unwrap();
        assert_eq!(
            mundo.describe_link(link),
            "[Bob:Professor] ─Mentoria→ [Alice:Aluno]"
        );
    }
}
