mod common;

use common::*;
use memrank::config::Config;
use memrank::domain::entities::entry::Entry;
use memrank::domain::error::DomainError;
use memrank::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use memrank::domain::values::top_k::TopK;
use memrank::MemRank;
use std::sync::Arc;

#[tokio::test]
async fn test_build_corpus_keeps_input_order() {
    let mr = setup();
    assert_eq!(mr.add_snippets(policies()).await.unwrap(), 4);

    let stats = mr.stats();
    assert_eq!(stats.entries, 4);
    assert_eq!(stats.dimension, Some(4));

    // Equal scores everywhere: order must be the insertion order.
    let zero = mr.rank_vector(&[0.0, 0.0, 0.0, 0.0], TopK::new(4).ok()).unwrap();
    let order: Vec<String> = zero.into_iter().map(|r| r.payload).collect();
    assert_eq!(order, policies());
}

#[tokio::test]
async fn test_retrieve_expense_question() {
    let mr = setup();
    mr.add_snippets(policies()).await.unwrap();

    let top = mr.retrieve_text(EXPENSE_QUESTION, TopK::new(1).ok()).await.unwrap();
    assert_eq!(top, vec![EXPENSES.to_string()]);

    let scored = mr.retrieve(EXPENSE_QUESTION, None).await.unwrap();
    assert_eq!(scored.len(), 3);
    assert_eq!(scored[0].payload, EXPENSES);
    assert_eq!(scored[1].payload, LEAVE);
}

#[tokio::test]
async fn test_context_block_uses_default_k() {
    let config = Config {
        default_k: TopK::new(2).unwrap(),
        fixture: None,
    };
    let mr = MemRank::with_config(Arc::new(policy_provider()), config);
    mr.add_snippets(policies()).await.unwrap();

    let context = mr.context_for(REMOTE_QUESTION).await.unwrap();
    assert_eq!(context, format!("- {VPN}\n- {PASSWORDS}"));
}

#[tokio::test]
async fn test_retrieve_before_build_is_empty_corpus() {
    let mr = setup();
    let err = mr.retrieve(EXPENSE_QUESTION, None).await.unwrap_err();
    assert_eq!(err, DomainError::EmptyCorpus);
}

#[tokio::test]
async fn test_unknown_snippet_adds_nothing() {
    let mr = setup();
    let err = mr
        .add_snippets(vec![VPN.to_string(), "Not a known policy".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Embedding(_)));
    assert_eq!(mr.stats().entries, 0);
}

#[tokio::test]
async fn test_empty_snippet_list_is_noop() {
    let mr = setup();
    assert_eq!(mr.add_snippets(vec![]).await.unwrap(), 0);
}

#[tokio::test]
async fn test_precomputed_entries_with_wrong_dimension_rejected() {
    let mr = setup();
    mr.add_snippets(policies()).await.unwrap();
    let err = mr
        .add_entries(vec![Entry::new(vec![1.0, 0.0], "short".to_string())])
        .unwrap_err();
    assert_eq!(err, DomainError::DimensionMismatch { expected: 4, actual: 2, index: Some(4) });
}

struct ShortChangingProvider;

#[async_trait::async_trait]
impl EmbeddingProvider for ShortChangingProvider {
    async fn embed(&self, texts: &[String], _input_type: InputType) -> Result<Vec<Vec<f64>>, DomainError> {
        Ok(texts.iter().skip(1).map(|_| vec![1.0]).collect())
    }

    fn dimension(&self) -> usize {
        1
    }
}

#[tokio::test]
async fn test_provider_returning_too_few_vectors() {
    let mr = MemRank::with_config(Arc::new(ShortChangingProvider), Config::default());
    let err = mr.add_snippets(policies()).await.unwrap_err();
    assert_eq!(err, DomainError::Embedding("Provider returned 3 vectors for 4 snippets".into()));

    let err = mr.retrieve("anything", None).await.unwrap_err();
    assert!(matches!(err, DomainError::Embedding(_)));
}
