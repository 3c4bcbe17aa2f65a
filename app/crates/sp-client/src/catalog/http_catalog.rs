use crate::http::HttpApi;
use crate::{CatalogSource, Result as ClientResult};

use sp_core::{Benefit, Medicine, Offer};

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Method};

const BENEFITS_PATH: &str = "/mock-data/benefits.json";
const OFFERS_PATH: &str = "/mock-data/offers.json";
const MEDICINES_PATH: &str = "/mock-data/medicines.json";

/// Catalog served as static JSON files.
pub struct HttpCatalog {
    http: HttpApi,
}

impl HttpCatalog {
    pub fn new(base_url: &str, client: ReqwestClient) -> Self {
        Self {
            http: HttpApi::new(base_url, client),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn benefits(&self) -> ClientResult<Vec<Benefit>> {
        let req = self.http.request(Method::GET, BENEFITS_PATH);
        self.http.execute(req).await
    }

    async fn offers(&self) -> ClientResult<Vec<Offer>> {
        let req = self.http.request(Method::GET, OFFERS_PATH);
        self.http.execute(req).await
    }

    async fn medicines(&self) -> ClientResult<Vec<Medicine>> {
        let req = self.http.request(Method::GET, MEDICINES_PATH);
        self.http.execute(req).await
    }
}
