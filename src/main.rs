#![allow(dead_code, unused_imports)]
#![allow(rustdoc::broken_intra_doc_links, rustdoc::invalid_html_tags)]
//! # Mundos Possíveis — Motor Ontológico
//!
//! **Ponto de entrada de demonstração** do motor de inferência ontológica.
//!
//! O binário monta um cenário acadêmico completo em quatro passos:
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Monta a T-Box (conceitos, relações, hierarquia ISA)
//!   ├── Congela a T-Box (Arc) e povoa mundos possíveis (frames e links)
//!   └── Imprime consultas instance_of / extensões alcançáveis no stdout
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Executar com logs detalhados (inclui snapshot JSON do mundo)
//! RUST_LOG=debug cargo run
//! ```
//!
//! Qualquer violação da ontologia (nome duplicado, ciclo, assinatura
//! violada) encerra o processo com código diferente de zero e a mensagem
//! do erro — exceto a violação provocada de propósito no fim do cenário,
//! exibida como demonstração da validação de assinatura.

// Declaração dos módulos da aplicação.
// Cada módulo corresponde a uma camada da separação T-Box/A-Box:

/// Módulo `core` — camada terminológica: Concept, Relation, KripkeScale, erros.
mod core;

/// Módulo `world` — camada assertiva: Frame, Link, PossibleWorld, KripkeStructure.
mod world;

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::core::KripkeScale;
use crate::world::{KripkeStructure, PossibleWorld};

/// Função principal do cenário de demonstração.
///
/// # Erros
///
/// Propaga qualquer erro do motor ontológico — o processo encerra com
/// código diferente de zero e a mensagem correspondente.
fn main() -> Result<()> {
    // Configura o sistema de logging/tracing.
    // Aceita a variável de ambiente RUST_LOG para configurar o nível.
    // Exemplo: RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🌍 Mundos Possíveis — montando a T-Box...");

    // ── T-Box: vocabulário acadêmico ─────────────────────────────────
    // Pessoa ← Aluno, Pessoa ← Funcionário ← Professor
    // Interação(Pessoa → Pessoa) ← Mentoria(Funcionário → Aluno)
    let mut scale = KripkeScale::new();
    let pessoa = scale.register_concept("Pessoa", &[])?;
    let aluno = scale.register_concept("Aluno", &[pessoa])?;
    let funcionario = scale.register_concept("Funcionário", &[pessoa])?;
    let professor = scale.register_concept("Professor", &[funcionario])?;
    let interacao = scale.register_relation("Interação", pessoa, pessoa, &[])?;
    let mentoria = scale.register_relation("Mentoria", funcionario, aluno, &[interacao])?;

    println!("[Definido] {}", scale.describe_relation(interacao)?);
    println!("[Definido] {}", scale.describe_relation(mentoria)?);
    tracing::info!(
        concepts = scale.concept_count(),
        relations = scale.relation_count(),
        "T-Box montada"
    );

    // Congela a T-Box: daqui em diante só consultas.
    let scale = Arc::new(scale);

    // ── A-Box: o mundo "Semestre 1" ──────────────────────────────────
    let mut sem1 = PossibleWorld::new("Semestre 1", scale.clone());
    let bob = sem1.create_frame("Bob", professor)?;
    let alice = sem1.create_frame("Alice", aluno)?;
    let tutoria = sem1.create_link(mentoria, bob, alice)?;

    println!("\n[Mundo] Semestre 1: {}", sem1.describe_link(sem1.link(tutoria)?));

    // Consultas instance_of: sobem a hierarquia a partir do tipo declarado.
    println!(
        "[Check] Bob é Pessoa?              {}",
        sem1.frame_instance_of(bob, pessoa)?
    );
    println!(
        "[Check] Bob é Funcionário?         {}",
        sem1.frame_instance_of(bob, funcionario)?
    );
    println!(
        "[Check] Bob é Aluno?               {}",
        sem1.frame_instance_of(bob, aluno)?
    );
    println!(
        "[Check] tutoria é Mentoria?        {}",
        sem1.link_instance_of(tutoria, mentoria)?
    );
    println!(
        "[Check] tutoria é Interação?       {}",
        sem1.link_instance_of(tutoria, interacao)?
    );

    // Violação provocada: Aluno não satisfaz o domínio Funcionário da
    // Mentoria. A falha é o comportamento esperado do cenário.
    match sem1.create_link(mentoria, alice, bob) {
        Err(e) => println!("[Erro esperado] {e}"),
        Ok(_) => anyhow::bail!("violação de domínio não foi detectada"),
    }

    // ── Camada modal: dois semestres ligados por acessibilidade ──────
    let mut sem2 = PossibleWorld::new("Semestre 2", scale.clone());
    sem2.create_frame("Carla", aluno)?;
    sem2.create_frame("Davi", professor)?;

    let mut kripke = KripkeStructure::new();
    kripke.add_world(sem1)?;
    kripke.add_world(sem2)?;
    kripke.add_access("Semestre 1", "Semestre 2")?;

    println!("\n[Kripke] Alunos alcançáveis a partir do Semestre 1:");
    for (world, frames) in kripke.reachable_extension("Semestre 1", aluno)? {
        let labels: Vec<&str> = frames.iter().map(|f| f.label.as_str()).collect();
        println!("[Extensão] {}: {}", world, labels.join(", "));
    }

    // Snapshot em memória do mundo inicial — superfície de inspeção,
    // visível apenas com RUST_LOG=debug.
    let snapshot = serde_json::to_string_pretty(kripke.world("Semestre 1")?)?;
    tracing::debug!(snapshot = %snapshot, "snapshot do mundo");

    tracing::info!("✅ Cenário concluído");
    Ok(())
}
