use opentelemetry::{KeyValue, trace::TracerProvider as _};
use opentelemetry_otlp::{Protocol, WithExportConfig, WithTonicConfig};
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, SdkTracerProvider},
};
use opentelemetry_semantic_conventions::{
    SCHEMA_URL,
    attribute::{SERVICE_NAME, SERVICE_VERSION},
    resource::DEPLOYMENT_ENVIRONMENT_NAME,
};
use rocket::{
    Data, Orbit, Request, Response, Rocket,
    fairing::{Fairing, Info, Kind},
    http::Header,
};
use std::time::Instant;
use tonic::metadata::{MetadataKey, MetadataMap};
use tracing::{Span, field, info_span};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

struct RequestTrace {
    span: Span,
    request_id: String,
    start_time: Instant,
}

/// Opens an `http_request` span per request and shuts the tracer provider down with Rocket.
pub struct TelemetryFairing {
    tracer_provider: Option<SdkTracerProvider>,
}

impl TelemetryFairing {
    pub fn new(tracer_provider: Option<SdkTracerProvider>) -> Self {
        Self { tracer_provider }
    }
}

#[rocket::async_trait]
impl Fairing for TelemetryFairing {
    fn info(&self) -> Info {
        Info {
            name: "OpenTelemetry",
            kind: Kind::Request | Kind::Response | Kind::Shutdown,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        let method = request.method().to_string();
        let uri = request.uri().to_string();
        let request_id = Uuid::new_v4().to_string();

        let span = info_span!(
            "http_request",
            otel.name = %format!("{} {}", method, uri),
            http.method = %method,
            http.uri = %uri,
            http.route = field::Empty,
            http.status_code = field::Empty,
            http.duration_ms = field::Empty,
            request.id = %request_id,
            error = field::Empty,
            error.message = field::Empty,
        );

        request.local_cache(|| RequestTrace {
            span,
            request_id,
            start_time: Instant::now(),
        });
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let trace = request.local_cache(|| RequestTrace {
            span: info_span!("http_request"),
            request_id: Uuid::new_v4().to_string(),
            start_time: Instant::now(),
        });

        let duration = trace.start_time.elapsed();

        if let Some(route) = request.route() {
            trace.span.record("http.route", field::display(&route.uri));
        }
        trace.span.record("http.status_code", response.status().code);
        trace
            .span
            .record("http.duration_ms", duration.as_millis() as i64);

        response.set_header(Header::new(REQUEST_ID_HEADER, trace.request_id.clone()));

        let _entered = trace.span.enter();
        tracing::info!(
            "Completed request in {}ms with status {}",
            duration.as_millis(),
            response.status().code
        );
    }

    async fn on_shutdown(&self, _rocket: &Rocket<Orbit>) {
        if let Some(provider) = &self.tracer_provider {
            if let Err(err) = provider.shutdown() {
                eprintln!("Failed to shut down tracer provider: {:?}", err);
            }
        }
    }
}

fn resource() -> Resource {
    let environment = if crate::env::is_production() {
        "production"
    } else {
        "development"
    };

    Resource::builder()
        .with_schema_url(
            [
                KeyValue::new(SERVICE_NAME, env!("CARGO_PKG_NAME")),
                KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
                KeyValue::new(DEPLOYMENT_ENVIRONMENT_NAME, environment),
            ],
            SCHEMA_URL,
        )
        .build()
}

// Construct TracerProvider for OpenTelemetryLayer
fn init_tracer_provider(endpoint: &str) -> anyhow::Result<SdkTracerProvider> {
    let mut metadata = MetadataMap::new();
    if let Ok(api_key) = std::env::var("OTLP_API_KEY") {
        let header =
            std::env::var("OTLP_API_KEY_HEADER").unwrap_or_else(|_| "x-api-key".to_string());
        metadata.insert(MetadataKey::from_bytes(header.as_bytes())?, api_key.parse()?);
    }

    let mut builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .with_protocol(Protocol::Grpc)
        .with_metadata(metadata);

    if endpoint.starts_with("https") {
        builder =
            builder.with_tls_config(tonic::transport::ClientTlsConfig::new().with_native_roots());
    }

    let exporter = builder.build()?;

    let tracer_provider = SdkTracerProvider::builder()
        .with_sampler(Sampler::AlwaysOn)
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(resource())
        .with_batch_exporter(exporter)
        .build();

    Ok(tracer_provider)
}

/// Installs the global subscriber. Spans are exported over OTLP only when
/// `OTEL_EXPORTER_OTLP_ENDPOINT` is set; the returned provider must be handed
/// to [`TelemetryFairing`] so it is flushed on shutdown.
pub fn init_tracing() -> Option<SdkTracerProvider> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let tracer_provider = match std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(endpoint) => match init_tracer_provider(&endpoint) {
            Ok(provider) => Some(provider),
            Err(err) => {
                eprintln!("Failed to initialise OTLP exporter, continuing without it: {err}");
                None
            }
        },
        Err(_) => None,
    };

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    let installed = match &tracer_provider {
        Some(provider) => registry
            .with(OpenTelemetryLayer::new(provider.tracer("grade-admin")))
            .try_init(),
        None => registry.try_init(),
    };

    if let Err(err) = installed {
        eprintln!("Tracing subscriber already installed: {err}");
    }

    tracer_provider
}
