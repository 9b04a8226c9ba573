use std::fs;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use log::info;

use routedoc::{
    api::routes::configure,
    config::{Cli, Command, DocArgs, GenerateArgs, OutputFormat, ServeArgs},
    ControllerRegistry, DocumentBuilder,
};

fn load_builder(args: &DocArgs) -> anyhow::Result<DocumentBuilder<ControllerRegistry>> {
    let registry = ControllerRegistry::load_manifest(&args.manifest)
        .with_context(|| format!("loading manifest {}", args.manifest.display()))?;
    Ok(DocumentBuilder::from_settings(registry, &args.settings()))
}

fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let document = load_builder(&args.doc)?.build()?;
    let rendered = match args.format {
        OutputFormat::Json => document.to_json_pretty()?,
        OutputFormat::Yaml => document.to_yaml()?,
    };
    match args.output {
        Some(path) => {
            fs::write(&path, rendered).with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let builder = web::Data::new(load_builder(&args.doc)?);
    // Fail at startup rather than on the first request.
    builder.build()?;

    let bind_addr = args.bind;
    println!("📖 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");
    println!("   YAML         → http://{bind_addr}/api-docs/openapi.yaml");
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(builder.clone())
            .configure(configure)
    })
    .bind(&bind_addr)
    .with_context(|| format!("binding {bind_addr}"))?
    .run()
    .await?;
    Ok(())
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Generate(args) => generate(args),
        Command::Serve(args) => serve(args).await,
    }
}
