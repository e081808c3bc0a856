#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use geocoder::tree::Tree;
use geocoder::{Attributes, BoundingBox, Provider, Proxies, Request};
use serde_json::Value;

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Serve `body` with `status` to the next `connections` requests on a
/// loopback port. Joining the handle yields each request's head.
pub fn serve(status: u16, body: &'static str, connections: usize) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut heads = Vec::new();
        for _ in 0..connections {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            heads.push(head);

            let response = format!(
                "HTTP/1.1 {status} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
        heads
    });

    (base, handle)
}

/// Adapter for an OpenCage-like response shape served locally
pub struct LocalProvider {
    pub url: String,
    pub proxies: Option<Proxies>,
}

impl LocalProvider {
    pub fn new(base: &str) -> Self {
        Self {
            url: format!("{base}/search"),
            proxies: None,
        }
    }

    /// Route this provider's requests through `proxies`
    pub fn through(mut self, proxies: Proxies) -> Self {
        self.proxies = Some(proxies);
        self
    }
}

impl Provider for LocalProvider {
    fn name(&self) -> &str {
        "local"
    }

    fn request(&self) -> Request {
        let request = Request::new(&self.url)
            .param("q", "453 Booth Street, Ottawa")
            .header("X-Test", "geocoder");
        match &self.proxies {
            Some(proxies) => request.with_proxies(proxies.clone()),
            None => request,
        }
    }

    fn results(&self, content: &Value) -> anyhow::Result<Vec<Value>> {
        content["results"]
            .as_array()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("missing results"))
    }

    fn extract(&self, _entry: &Value, tree: &Tree) -> Attributes {
        let components = &tree["components"];
        let bounds = &tree["bounds"];
        Attributes {
            lat: tree.f64("lat"),
            lng: tree.f64("lng"),
            address: tree.str("formatted").map(str::to_string),
            street: components["road"].as_str().map(str::to_string),
            city: components["city"].as_str().map(str::to_string),
            bbox: BoundingBox::from_values(
                &bounds["south"],
                &bounds["west"],
                &bounds["north"],
                &bounds["east"],
            ),
            ..Attributes::default()
        }
    }
}

pub const OTTAWA: &str = r#"{
  "results": [{
    "formatted": "453 Booth Street, Ottawa, ON K1R 7K9, Canada",
    "lat": 45.4125,
    "lng": -75.7029,
    "components": {"road": "Booth Street", "city": "Ottawa"},
    "bounds": {"south": 45.4120, "west": -75.7035, "north": 45.4130, "east": -75.7024}
  }]
}"#;
