use super::*;

impl AmsClient {
    pub fn get_all_assets(&self) -> ApiResult {
        self.http.get_request("/assets/getall", None)
    }

    pub fn get_asset_by_id(&self, asset_id: i64) -> ApiResult {
        self.http
            .get_request(&format!("/assets/getbyid/{}", asset_id), None)
    }

    pub fn get_assets_by_category(&self, category_name: &str) -> ApiResult {
        self.http
            .get_request(&format!("/assets/category/{}", seg(category_name)), None)
    }

    pub fn get_assets_by_employee(&self, employee_id: i64) -> ApiResult {
        self.http
            .get_request(&format!("/assets/assigned/{}", employee_id), None)
    }

    pub fn add_asset<P: serde::Serialize + ?Sized>(&self, payload: &P) -> ApiResult {
        self.http
            .post_request("/assets/add", RequestBody::json(payload)?, None)
    }

    pub fn update_asset<P: serde::Serialize + ?Sized>(&self, asset_id: i64, payload: &P) -> ApiResult {
        self.http.put_request(
            &format!("/assets/update/{}", asset_id),
            RequestBody::json(payload)?,
            None,
        )
    }

    pub fn delete_asset(&self, asset_id: i64) -> ApiResult {
        self.http
            .delete_request(&format!("/assets/delete/{}", asset_id), None)
    }

    /// Uploads an image as multipart field `file`.
    pub fn upload_asset_image(
        &self,
        asset_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ApiResult {
        let part = reqwest::blocking::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::blocking::multipart::Form::new().part("file", part);
        self.http.post_request(
            &format!("/assets/{}/image", asset_id),
            RequestBody::Multipart(form),
            None,
        )
    }
}
