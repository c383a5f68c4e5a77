// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_test_context.rs

use crate::infrastructure::postgres::factories::PostgresContext;
use crate::infrastructure::postgres::utils::PostgresTestContextBuilder;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use std::path::Path;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres as PostgresImage;

pub struct PostgresTestContext {
    context: PostgresContext,
    pub container: ContainerAsync<PostgresImage>,
}

impl PostgresTestContext {
    pub fn builder() -> PostgresTestContextBuilder {
        PostgresTestContextBuilder::new()
    }

    pub(crate) async fn restore(builder: PostgresTestContextBuilder) -> Self {
        // 1. Démarrage container
        let container = PostgresImage::default()
            .with_user(&builder.user)
            .with_password(&builder.password)
            .with_db_name(&builder.db_name)
            .with_tag(&builder.image_tag)
            .start()
            .await
            .expect("Échec du démarrage de Postgres");

        let host_port = container.get_host_port_ipv4(5432).await.unwrap();
        let conn_str = format!(
            "postgres://{}:{}@127.0.0.1:{}/{}",
            builder.user, builder.password, host_port, builder.db_name
        );

        // 2. Contexte de production, sans lecture de l'ENV
        let mut context_builder = PostgresContext::builder_raw().with_url(&conn_str);
        if let Some(cfg) = builder.config {
            context_builder = context_builder.with_config(cfg);
        }
        let context = context_builder
            .build()
            .await
            .expect("Failed to build PostgresContext for tests");

        // 3. Migrations du module
        for path in &builder.migrations {
            if !Path::new(path).exists() {
                println!("⚠️ WARNING: Migration path not found: {}", path);
                continue;
            }

            let migrator = Migrator::new(Path::new(path))
                .await
                .expect("Invalid migration path");
            migrator
                .run(&context.pool())
                .await
                .expect("Failed to apply migrations");
        }

        Self { context, container }
    }

    pub fn pool(&self) -> PgPool {
        self.context.pool()
    }

    pub fn url(&self) -> &str {
        self.context.url()
    }
}
