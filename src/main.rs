use anyhow::{Result, bail};
use sluggable::application::commands::SluggedSaveService;
use sluggable::application::ports::util::Transliterator;
use sluggable::config::SlugConfig;
use sluggable::domain::slug::{FieldValue, SlugOptions, SlugService, SluggableRecord};
use sluggable::infrastructure::{
    database,
    record::MapRecord,
    repositories::{InMemorySlugStore, PostgresSlugExistence},
    util::DefaultTransliterator,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SOURCE_FIELD: &str = "source";

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = SlugConfig::from_env()?;

    let titles: Vec<String> = std::env::args()
        .skip(1)
        .filter(|title| !title.trim().is_empty())
        .collect();
    if titles.is_empty() {
        bail!("usage: sluggable <title> [<title>...]");
    }

    let options = SlugOptions::from_config(&config)
        .generate_slugs_from([SOURCE_FIELD])
        .save_slugs_to(config.slug_column());
    let transliterator: Arc<dyn Transliterator> = Arc::new(DefaultTransliterator);

    match config.database_url() {
        Some(url) => {
            let pool = database::init_pool(url).await?;
            tracing::info!(table = config.table(), "checking slugs against postgres");
            let slugs = SlugService::new(
                Arc::new(PostgresSlugExistence::new(pool, config.table())),
                transliterator,
            );
            for title in titles {
                let mut record = source_record(&config, &options, title);
                let slug = slugs.generate(&mut record).await?;
                print_slug(Some(slug.into()));
            }
        }
        None => {
            tracing::info!("DATABASE_URL not set; saving into an in-memory store");
            let store = Arc::new(InMemorySlugStore::new(config.slug_column()));
            let slugs = Arc::new(SlugService::new(store.clone(), transliterator));
            let save = SluggedSaveService::new(slugs, store, config.save_attempts());
            for title in titles {
                let mut record = source_record(&config, &options, title);
                let key = save.create(&mut record).await?;
                tracing::info!(%key, "record saved");
                print_slug(record.field(config.slug_column()));
            }
        }
    }

    Ok(())
}

fn source_record(config: &SlugConfig, options: &SlugOptions, title: String) -> MapRecord {
    MapRecord::new(options.clone())
        .with_key_name(config.key_column())
        .with_field(SOURCE_FIELD, title)
}

fn print_slug(value: Option<FieldValue>) {
    match value {
        Some(FieldValue::Text(slug)) => println!("{slug}"),
        Some(FieldValue::Translations(map)) => {
            for (language, slug) in map {
                println!("{language}\t{slug}");
            }
        }
        None => tracing::warn!("no slug generated"),
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
