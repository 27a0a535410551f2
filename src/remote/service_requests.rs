use super::*;

impl AmsClient {
    pub fn get_all_service_requests(&self) -> ApiResult {
        self.http
            .get_request("/service-requests/allServiceRequests", None)
    }

    pub fn get_service_request_by_id(&self, service_request_id: i64) -> ApiResult {
        self.http.get_request(
            &format!(
                "/service-requests/getServiceRequestById/{}",
                service_request_id
            ),
            None,
        )
    }

    pub fn get_service_requests_by_employee(&self, employee_id: i64) -> ApiResult {
        self.http.get_request(
            &format!("/service-requests/serviceRequestByEmployee/{}", employee_id),
            None,
        )
    }

    pub fn get_service_requests_by_status(&self, status: &str) -> ApiResult {
        self.http.get_request(
            &format!("/service-requests/findByStatus/{}", seg(status)),
            None,
        )
    }

    pub fn create_service_request<P: serde::Serialize + ?Sized>(&self, payload: &P) -> ApiResult {
        self.http.post_request(
            "/service-requests/createServiceRequest",
            RequestBody::json(payload)?,
            None,
        )
    }

    /// The new status travels in the path; there is no body.
    pub fn update_service_request(&self, service_request_id: i64, status: &str) -> ApiResult {
        self.http.put_request(
            &format!(
                "/service-requests/updateServiceRequest/{}/{}",
                service_request_id,
                seg(status)
            ),
            RequestBody::None,
            None,
        )
    }
}
