use super::*;

impl AmsClient {
    pub fn get_all_employees(&self) -> ApiResult {
        self.http.get_request("/employees/getAllEmployee", None)
    }

    pub fn get_employee_by_id(&self, employee_id: i64) -> ApiResult {
        self.http
            .get_request(&format!("/employees/getEmployeeById/{}", employee_id), None)
    }

    pub fn register_employee<P: serde::Serialize + ?Sized>(&self, payload: &P) -> ApiResult {
        self.http
            .post_request("/employees/register", RequestBody::json(payload)?, None)
    }

    pub fn update_employee<P: serde::Serialize + ?Sized>(
        &self,
        employee_id: i64,
        payload: &P,
    ) -> ApiResult {
        self.http.put_request(
            &format!("/employees/updateEmployee/{}", employee_id),
            RequestBody::json(payload)?,
            None,
        )
    }

    pub fn delete_employee(&self, employee_id: i64) -> ApiResult {
        self.http
            .delete_request(&format!("/employees/delete/{}", employee_id), None)
    }
}
