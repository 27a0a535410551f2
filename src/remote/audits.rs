use super::*;

impl AmsClient {
    pub fn get_all_audits(&self) -> ApiResult {
        self.http.get_request("/audits/getall", None)
    }

    pub fn get_audits_by_employee(&self, employee_id: i64) -> ApiResult {
        self.http
            .get_request(&format!("/audits/getbyeid/{}", employee_id), None)
    }

    pub fn get_audit_by_id(&self, audit_id: i64) -> ApiResult {
        self.http
            .get_request(&format!("/audits/getbyid/{}", audit_id), None)
    }

    pub fn send_audit(&self, employee_id: i64, asset_id: i64) -> ApiResult {
        self.http.post_request(
            &format!("/audits/send/{}/{}", employee_id, asset_id),
            RequestBody::None,
            None,
        )
    }

    pub fn update_audit_decision<P: serde::Serialize + ?Sized>(
        &self,
        audit_id: i64,
        payload: &P,
    ) -> ApiResult {
        self.http.put_request(
            &format!("/audits/{}/decision", audit_id),
            RequestBody::json(payload)?,
            None,
        )
    }
}
