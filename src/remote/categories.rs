use super::*;

impl AmsClient {
    pub fn get_all_asset_categories(&self) -> ApiResult {
        self.http.get_request("/asset-categories/getall", None)
    }

    pub fn get_asset_category_by_id(&self, category_id: i64) -> ApiResult {
        self.http
            .get_request(&format!("/asset-categories/getbyid/{}", category_id), None)
    }

    pub fn get_asset_category_by_name(&self, category_name: &str) -> ApiResult {
        self.http.get_request(
            &format!("/asset-categories/getbyname/{}", seg(category_name)),
            None,
        )
    }

    pub fn add_asset_category<P: serde::Serialize + ?Sized>(&self, payload: &P) -> ApiResult {
        self.http
            .post_request("/asset-categories/add", RequestBody::json(payload)?, None)
    }

    pub fn update_asset_category<P: serde::Serialize + ?Sized>(
        &self,
        category_id: i64,
        payload: &P,
    ) -> ApiResult {
        self.http.put_request(
            &format!("/asset-categories/update/{}", category_id),
            RequestBody::json(payload)?,
            None,
        )
    }

    pub fn delete_asset_category(&self, category_id: i64) -> ApiResult {
        self.http
            .delete_request(&format!("/asset-categories/delete/{}", category_id), None)
    }
}
