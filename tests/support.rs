use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use quotedeck_core::{
    ApiToken, FinnhubClient, HttpClient, HttpError, HttpRequest, HttpResponse, Symbol,
};

pub const BASE_URL: &str = "https://upstream.test/api/v1";

pub fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("test symbols are valid")
}

pub fn symbols(raw: &[&str]) -> Vec<Symbol> {
    raw.iter().map(|each| symbol(each)).collect()
}

pub fn token() -> ApiToken {
    ApiToken::new("test-key").expect("test token is non-empty")
}

pub fn client(http: Arc<ScriptedHttpClient>) -> FinnhubClient {
    FinnhubClient::new(BASE_URL, token(), http)
}

/// Finnhub quote body with the upstream's wire field names.
pub fn quote_body(price: f64, percent_change: f64) -> String {
    format!(r#"{{"c": {price}, "dp": {percent_change}}}"#)
}

/// Finnhub candle body: `"ok"` status plus parallel close/timestamp arrays.
pub fn candle_body(closes: &[f64]) -> String {
    let closes_json: Vec<String> = closes.iter().map(f64::to_string).collect();
    let timestamps: Vec<String> = (0..closes.len())
        .map(|index| (1_700_000_000_i64 + index as i64 * 300).to_string())
        .collect();
    format!(
        r#"{{"s": "ok", "c": [{}], "t": [{}]}}"#,
        closes_json.join(", "),
        timestamps.join(", ")
    )
}

struct Rule {
    fragment: String,
    responses: Vec<Result<HttpResponse, HttpError>>,
    served: AtomicUsize,
}

/// Scripted transport for offline behavior tests.
///
/// Responses are selected by the first rule whose fragment appears in the
/// request URL; a rule may hold a sequence of responses, with the final one
/// repeating once drained. Unmatched URLs get an empty JSON object. Every
/// request URL is recorded, and the peak number of in-flight requests is
/// tracked so tests can assert on overlap behavior.
pub struct ScriptedHttpClient {
    rules: Vec<Rule>,
    latency: Option<Duration>,
    requests: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            latency: None,
            requests: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    /// Delays every response, simulating a slow upstream.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Responds 200 with `body` whenever the URL contains `fragment`.
    pub fn ok(self, fragment: &str, body: &str) -> Self {
        self.on(fragment, vec![Ok(HttpResponse::ok_json(body))])
    }

    /// Simulates a transport failure whenever the URL contains `fragment`.
    pub fn fail(self, fragment: &str) -> Self {
        self.on(
            fragment,
            vec![Err(HttpError::new("simulated connection failure"))],
        )
    }

    /// Responds with the given HTTP status and an empty body.
    pub fn status(self, fragment: &str, status: u16) -> Self {
        self.on(
            fragment,
            vec![Ok(HttpResponse {
                status,
                body: String::new(),
            })],
        )
    }

    /// Queues a response sequence for URLs containing `fragment`.
    pub fn on(
        mut self,
        fragment: &str,
        responses: Vec<Result<HttpResponse, HttpError>>,
    ) -> Self {
        assert!(!responses.is_empty(), "a rule needs at least one response");
        self.rules.push(Rule {
            fragment: fragment.to_string(),
            responses,
            served: AtomicUsize::new(0),
        });
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .len()
    }

    pub fn calls_containing(&self, fragment: &str) -> usize {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .iter()
            .filter(|url| url.contains(fragment))
            .count()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn response_for(&self, url: &str) -> Result<HttpResponse, HttpError> {
        for rule in &self.rules {
            if url.contains(&rule.fragment) {
                let served = rule.served.fetch_add(1, Ordering::SeqCst);
                let index = served.min(rule.responses.len() - 1);
                return rule.responses[index].clone();
            }
        }
        Ok(HttpResponse::ok_json("{}"))
    }
}

impl Default for ScriptedHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request.url.clone());
        let response = self.response_for(&request.url);
        let latency = self.latency;

        Box::pin(async move {
            let concurrent = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak_in_flight.fetch_max(concurrent, Ordering::SeqCst);

            if let Some(latency) = latency {
                tokio::time::sleep(latency).await;
            }

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            response
        })
    }
}
