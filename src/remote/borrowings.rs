use super::*;

impl AmsClient {
    pub fn get_borrowings_by_employee(&self, employee_id: i64) -> ApiResult {
        self.http
            .get_request(&format!("/borrowings/getbyeid/{}", employee_id), None)
    }

    pub fn get_active_borrowings(&self) -> ApiResult {
        self.http.get_request("/borrowings/active", None)
    }

    pub fn get_pending_borrowings(&self) -> ApiResult {
        self.http.get_request("/borrowings/pending", None)
    }

    pub fn get_rejected_borrowings(&self) -> ApiResult {
        self.http.get_request("/borrowings/rejected", None)
    }

    pub fn get_returned_borrowings(&self) -> ApiResult {
        self.http.get_request("/borrowings/returned", None)
    }

    pub fn request_borrowing<P: serde::Serialize + ?Sized>(&self, payload: &P) -> ApiResult {
        self.http
            .post_request("/borrowings/request", RequestBody::json(payload)?, None)
    }

    pub fn update_borrowing_action<P: serde::Serialize + ?Sized>(
        &self,
        borrowing_id: i64,
        payload: &P,
    ) -> ApiResult {
        self.http.put_request(
            &format!("/borrowings/{}/action", borrowing_id),
            RequestBody::json(payload)?,
            None,
        )
    }

    pub fn return_borrowing(&self, borrowing_id: i64) -> ApiResult {
        self.http.put_request(
            &format!("/borrowings/{}/return", borrowing_id),
            RequestBody::None,
            None,
        )
    }
}
