//! # KripkeStructure — Mundos Ligados por Acessibilidade
//!
//! Uma [`KripkeStructure`] reúne vários [`PossibleWorld`]s nomeados e uma
//! relação de **acessibilidade** entre eles ("do Semestre 1 enxerga-se o
//! Semestre 2"). É a camada modal do motor: consultas podem olhar um mundo
//! isolado ou o conjunto de mundos alcançáveis a partir de um ponto de partida.
//!
//! ## Consulta Modal
//!
//! [`reachable_extension`](KripkeStructure::reachable_extension) percorre o
//! grafo de acessibilidade em largura a partir de um mundo inicial e coleta,
//! em cada mundo visitado, a extensão do conceito consultado. Mundos fora do
//! alcance não participam — a acessibilidade é direcionada e **não** é
//! transitiva por padrão: só o fecho alcançável via arestas declaradas entra
//! na resposta.
//!
//! ```text
//! Semestre 1 ──→ Semestre 2       Semestre 3 (isolado)
//!
//! reachable_extension("Semestre 1", Aluno)
//!   = { "Semestre 1": [...], "Semestre 2": [...] }   // Semestre 3 fora
//! ```

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::core::{ConceptId, OntologyError, Result};

use super::frame::Frame;
use super::possible_world::PossibleWorld;

/// Conjunto de mundos nomeados com relação de acessibilidade direcionada.
#[derive(Serialize)]
pub struct KripkeStructure {
    /// Mapa de mundos: nome → mundo.
    worlds: HashMap<String, PossibleWorld>,

    /// Arestas de acessibilidade: nome de origem → nomes alcançáveis em um passo.
    accessibility: HashMap<String, Vec<String>>,
}

impl KripkeStructure {
    /// Cria uma estrutura vazia.
    pub fn new() -> Self {
        Self {
            worlds: HashMap::new(),
            accessibility: HashMap::new(),
        }
    }

    /// Incorpora um mundo à estrutura, indexado pelo próprio nome.
    ///
    /// # Erros
    ///
    /// [`OntologyError::DuplicateName`] se já existe um mundo com o mesmo nome
    /// — sobrescrever silenciosamente um mundo povoado esconderia perda de dados.
    pub fn add_world(&mut self, world: PossibleWorld) -> Result<()> {
        if self.worlds.contains_key(&world.name) {
            return Err(OntologyError::DuplicateName(world.name.clone()));
        }
        tracing::debug!(world = %world.name, "Kripke: mundo incorporado");
        self.worlds.insert(world.name.clone(), world);
        Ok(())
    }

    /// Declara que `to` é acessível a partir de `from`.
    ///
    /// # Erros
    ///
    /// [`OntologyError::UnknownWorld`] se qualquer um dos dois nomes não está
    /// na estrutura.
    pub fn add_access(&mut self, from: &str, to: &str) -> Result<()> {
        self.ensure_world(from)?;
        self.ensure_world(to)?;
        self.accessibility
            .entry(from.to_string())
            .or_default()
            .push(to.to_string());
        tracing::debug!(from = %from, to = %to, "Kripke: acessibilidade declarada");
        Ok(())
    }

    /// Busca um mundo pelo nome.
    ///
    /// # Erros
    ///
    /// [`OntologyError::UnknownWorld`] se o nome não está na estrutura.
    pub fn world(&self, name: &str) -> Result<&PossibleWorld> {
        self.worlds
            .get(name)
            .ok_or_else(|| OntologyError::UnknownWorld(name.to_string()))
    }

    /// Busca mutável de um mundo pelo nome — para povoar mundos já incorporados.
    pub fn world_mut(&mut self, name: &str) -> Result<&mut PossibleWorld> {
        self.worlds
            .get_mut(name)
            .ok_or_else(|| OntologyError::UnknownWorld(name.to_string()))
    }

    /// Extensão de um conceito em todos os mundos alcançáveis a partir de `start`.
    ///
    /// Busca em largura sobre o grafo de acessibilidade (o mundo inicial
    /// conta como alcançável). Mundos com extensão vazia ficam de fora da
    /// resposta. O mapa de retorno é ordenado por nome de mundo e cada
    /// extensão vem ordenada por rótulo, para saída determinística.
    ///
    /// # Erros
    ///
    /// - [`OntologyError::UnknownWorld`] — `start` não está na estrutura
    /// - os erros de [`PossibleWorld::extension`] para o conceito consultado
    pub fn reachable_extension(
        &self,
        start: &str,
        concept: ConceptId,
    ) -> Result<BTreeMap<String, Vec<&Frame>>> {
        self.ensure_world(start)?;

        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::from([start]);
        let mut results = BTreeMap::new();

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            if let Some(world) = self.worlds.get(current) {
                let extension = world.extension(concept)?;
                if !extension.is_empty() {
                    results.insert(current.to_string(), extension);
                }
            }
            if let Some(neighbors) = self.accessibility.get(current) {
                queue.extend(neighbors.iter().map(String::as_str));
            }
        }

        Ok(results)
    }

    /// Retorna o número de mundos na estrutura.
    pub fn world_count(&self) -> usize {
        self.worlds.len()
    }

    fn ensure_world(&self, name: &str) -> Result<()> {
        if !self.worlds.contains_key(name) {
            return Err(OntologyError::UnknownWorld(name.to_string()));
        }
        Ok(())
    }
}

impl Default for KripkeStructure {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::core::KripkeScale;

    use super::*;

    /// Três mundos sobre a mesma T-Box: Semestre 1 ──→ Semestre 2,
    /// Semestre 3 isolado. Alunos: Alice (S1), Carla (S2), Eva (S3).
    fn campus() -> (KripkeStructure, ConceptId) {
        let mut scale = KripkeScale::new();
        let pessoa = scale.register_concept("Pessoa", &[]).unwrap();
        let aluno = scale.register_concept("Aluno", &[pessoa]).unwrap();
        let professor = scale.register_concept("Professor", &[pessoa]).unwrap();
        let scale = Arc::new(scale);

        let mut sem1 = PossibleWorld::new("Semestre 1", scale.clone());
        sem1.create_frame("Alice", aluno).unwrap();
        sem1.create_frame("Bob", professor).unwrap();
        let mut sem2 = PossibleWorld::new("Semestre 2", scale.clone());
        sem2.create_frame("Carla", aluno).unwrap();
        let mut sem3 = PossibleWorld::new("Semestre 3", scale.clone());
        sem3.create_frame("Eva", aluno).unwrap();

        let mut kripke = KripkeStructure::new();
        kripke.add_world(sem1).unwrap();
        kripke.add_world(sem2).unwrap();
        kripke.add_world(sem3).unwrap();
        kripke.add_access("Semestre 1", "Semestre 2").unwrap();
        (kripke, aluno)
    }

    /// Verifica que a extensão alcançável cobre o mundo inicial e os
    /// acessíveis, e exclui mundos isolados
    #[test]
    fn test_reachable_extension() {
        let (kripke, aluno) = campus();
        let reachable = kripke.reachable_extension("Semestre 1", aluno).unwrap();

        let worlds: Vec<&str> = reachable.keys().map(String::as_str).collect();
        assert_eq!(worlds, vec!["Semestre 1", "Semestre 2"]);
        assert_eq!(reachable["Semestre 1"][0].label, "Alice");
        assert_eq!(reachable["Semestre 2"][0].label, "Carla");
    }

    /// Verifica que a acessibilidade é direcionada: a partir do Semestre 2
    /// não se enxerga o Semestre 1
    #[test]
    fn test_accessibility_is_directed() {
        let (kripke, aluno) = campus();
        let reachable = kripke.reachable_extension("Semestre 2", aluno).unwrap();
        let worlds: Vec<&str> = reachable.keys().map(String::as_str).collect();
        assert_eq!(worlds, vec!["Semestre 2"]);
    }

    /// Verifica que mundo inicial desconhecido falha com UnknownWorld
    #[test]
    fn test_unknown_start_world_fails() {
        let (kripke, aluno) = campus();
        assert!(matches!(
            kripke.reachable_extension("Férias", aluno).unwrap_err(),
            OntologyError::UnknownWorld(_)
        ));
    }

    /// Verifica que nome de mundo repetido falha com DuplicateName
    #[test]
    fn test_duplicate_world_fails() {
        let (mut kripke, _) = campus();
        let scale = Arc::new(KripkeScale::new());
        let err = kripke
            .add_world(PossibleWorld::new("Semestre 1", scale))
            .unwrap_err();
        assert!(matches!(err, OntologyError::DuplicateName(_)));
        assert_eq!(kripke.world_count(), 3);
    }

    /// Verifica que declarar acessibilidade com mundo ausente falha
    #[test]
    fn test_add_access_unknown_world_fails() {
        let (mut kripke, _) = campus();
        assert!(matches!(
            kripke.add_access("Semestre 1", "Férias").unwrap_err(),
            OntologyError::UnknownWorld(_)
        ));
    }
}
