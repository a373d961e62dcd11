pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::build_corpus::BuildCorpusUseCase;
use crate::application::retrieve::{render_context, RetrieveUseCase};
use crate::config::Config;
use crate::domain::entities::corpus_stats::CorpusStats;
use crate::domain::entities::entry::Entry;
use crate::domain::entities::scored_result::ScoredResult;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::values::top_k::TopK;
use crate::infrastructure::fixture::Fixture;
use crate::infrastructure::memory::vector_store::InMemoryVectorStore;
use std::path::PathBuf;
use std::sync::Arc;

pub struct MemRank {
    build_corpus_uc: BuildCorpusUseCase,
    retrieve_uc: RetrieveUseCase,
    vector_store: Arc<dyn VectorStore>,
    config: Config,
}

impl MemRank {
    /// In-memory corpus, configuration from the environment.
    pub fn new(embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self::with_config(embedder, Config::from_env())
    }

    pub fn with_config(embedder: Arc<dyn EmbeddingProvider>, config: Config) -> Self {
        Self::with_providers(embedder, Arc::new(InMemoryVectorStore::new()), config)
    }

    pub fn with_providers(
        embedder: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStore>,
        config: Config,
    ) -> Self {
        let provider_dim = embedder.dimension();
        if provider_dim > 0 {
            if let Some(stored_dim) = vector_store.dimension() {
                if stored_dim != provider_dim {
                    tracing::warn!(
                        stored_dim,
                        provider_dim,
                        "stored vectors and embedding provider disagree on dimension; queries will fail"
                    );
                }
            }
        }

        Self {
            build_corpus_uc: BuildCorpusUseCase::new(embedder.clone(), vector_store.clone()),
            retrieve_uc: RetrieveUseCase::new(embedder, vector_store.clone()),
            vector_store,
            config,
        }
    }

    /// Load a fixture of precomputed vectors into a fresh corpus. An explicit
    /// `path` wins over `config.fixture`.
    pub fn from_fixture(config: Config, path: Option<PathBuf>) -> Result<Self, DomainError> {
        let path = path.or_else(|| config.fixture.clone()).ok_or_else(|| {
            DomainError::Config("No fixture given: pass --fixture or set MEMRANK_FIXTURE".into())
        })?;
        let fixture = Fixture::load(&path)?;
        let mr = Self::with_config(Arc::new(fixture.provider()), config);
        mr.add_entries(fixture.entries)?;
        Ok(mr)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Embed and append snippets. Returns the corpus size afterwards.
    pub async fn add_snippets(&self, snippets: Vec<String>) -> Result<usize, DomainError> {
        self.build_corpus_uc.execute(snippets).await
    }

    /// Append entries whose vectors were computed elsewhere.
    pub fn add_entries(&self, entries: Vec<Entry<String>>) -> Result<usize, DomainError> {
        self.vector_store.append_batch(entries)
    }

    pub async fn retrieve(&self, query: &str, k: Option<TopK>) -> Result<Vec<ScoredResult<String>>, DomainError> {
        self.retrieve_uc.retrieve(query, k.unwrap_or(self.config.default_k)).await
    }

    pub async fn retrieve_text(&self, query: &str, k: Option<TopK>) -> Result<Vec<String>, DomainError> {
        self.retrieve_uc.retrieve_text(query, k.unwrap_or(self.config.default_k)).await
    }

    /// Context block of the default number of snippets for `query`.
    pub async fn context_for(&self, query: &str) -> Result<String, DomainError> {
        let results = self.retrieve(query, None).await?;
        Ok(render_context(&results))
    }

    /// Rank a raw query vector against the current corpus.
    pub fn rank_vector(&self, query: &[f64], k: Option<TopK>) -> Result<Vec<ScoredResult<String>>, DomainError> {
        self.vector_store.search_similar(query, k.unwrap_or(self.config.default_k))
    }

    pub fn stats(&self) -> CorpusStats {
        let snapshot = self.vector_store.snapshot();
        CorpusStats {
            entries: snapshot.len(),
            dimension: snapshot.first().map(Entry::dimension),
        }
    }
}
