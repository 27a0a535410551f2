use super::*;

impl AmsClient {
    pub fn login<P: serde::Serialize + ?Sized>(&self, payload: &P) -> ApiResult {
        self.http
            .post_request("/auth/authenticate", RequestBody::json(payload)?, None)
    }

    pub fn register<P: serde::Serialize + ?Sized>(&self, payload: &P) -> ApiResult {
        self.http
            .post_request("/auth/register", RequestBody::json(payload)?, None)
    }
}
