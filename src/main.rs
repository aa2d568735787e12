//! DinerScore CLI entrypoint.

use std::sync::Arc;

use mimalloc::MiMalloc;

use dinerscore::classifier::{KeywordClassifier, LlmReviewClassifier, ReviewClassifier};
use dinerscore::config::Config;
use dinerscore::constants::DEFAULT_QUERY;
use dinerscore::corpus::ReviewIndex;
use dinerscore::pipeline::ReviewPipeline;
use dinerscore::provider::ChatProvider;
use dinerscore::resolver::{KeywordNameResolver, LlmNameResolver, NameResolver};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let query = query_from_args(std::env::args().skip(1));

    let index = Arc::new(ReviewIndex::from_path(&config.corpus_path)?);
    tracing::info!(
        corpus = %config.corpus_path.display(),
        restaurants = index.len(),
        reviews = index.review_count(),
        "Review index loaded"
    );

    if config.mock_provider {
        tracing::warn!("DINERSCORE_MOCK_PROVIDER set, scoring offline with keyword matching");
        let resolver = KeywordNameResolver::new(index.restaurant_names());
        run_query(ReviewPipeline::new(index, resolver, KeywordClassifier::new()), &query).await
    } else {
        tracing::info!(model = %config.model, "Using chat model");
        let provider = ChatProvider::new(config.model.clone());
        let mut resolver = LlmNameResolver::new(provider.clone());
        if config.hint_known_names {
            resolver = resolver.with_known_names(index.restaurant_names());
        }
        let classifier = LlmReviewClassifier::new(provider);
        run_query(ReviewPipeline::new(index, resolver, classifier), &query).await
    }
}

fn query_from_args(args: impl Iterator<Item = String>) -> String {
    let joined = args.collect::<Vec<_>>().join(" ");
    if joined.trim().is_empty() {
        DEFAULT_QUERY.to_string()
    } else {
        joined
    }
}

async fn run_query<R, C>(pipeline: ReviewPipeline<R, C>, query: &str) -> anyhow::Result<()>
where
    R: NameResolver,
    C: ReviewClassifier,
{
    match pipeline.score(query).await {
        Ok(overall) => {
            println!("{overall}");
            Ok(())
        }
        Err(e) => {
            let stage = e.failed_stage();
            let component = e.component();
            tracing::error!(
                stage = %stage,
                component,
                error = %e,
                "Pipeline aborted"
            );
            Err(anyhow::Error::new(e).context(format!("{component} failed at stage {stage}")))
        }
    }
}
