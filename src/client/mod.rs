use reqwest::{Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Thin JSON client for one of the resource paths, e.g. `books`.
pub struct Client {
    client: reqwest::Client,
    url: Url,
}

impl Client {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    fn url(&self, path: &str) -> Url {
        self.url.join(path).unwrap()
    }

    pub async fn list<R: DeserializeOwned>(&self, resource: &str) -> Vec<R> {
        let res = self.client.get(self.url(resource)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        res.json().await.unwrap()
    }

    pub async fn create<I, R>(&self, resource: &str, input: &I) -> R
    where
        I: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let res = self.post(resource, input).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        res.json().await.unwrap()
    }

    pub async fn post<I: Serialize + ?Sized>(&self, resource: &str, input: &I) -> Response {
        self.client
            .post(self.url(resource))
            .json(input)
            .send()
            .await
            .unwrap()
    }

    pub async fn get(&self, resource: &str, id: &str) -> Response {
        self.client
            .get(self.url(&format!("{resource}/{id}")))
            .send()
            .await
            .unwrap()
    }

    pub async fn put<I: Serialize + ?Sized>(&self, resource: &str, id: &str, input: &I) -> Response {
        self.client
            .put(self.url(&format!("{resource}/{id}")))
            .json(input)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete(&self, resource: &str, id: &str) -> Response {
        self.client
            .delete(self.url(&format!("{resource}/{id}")))
            .send()
            .await
            .unwrap()
    }
}
