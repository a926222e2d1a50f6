//! API handler: dispatches parsed requests onto an address book

use serde_json::{json, Value};

use crate::book::AddressBook;
use crate::store::SlotBackend;

use super::errors::{ApiError, ApiResult};
use super::request::Request;
use super::response::Response;

pub struct ApiHandler<'a, B: SlotBackend> {
    book: &'a mut AddressBook<B>,
}

impl<'a, B: SlotBackend> ApiHandler<'a, B> {
    pub fn new(book: &'a mut AddressBook<B>) -> Self {
        Self { book }
    }

    /// Handle a raw JSON request string
    pub fn handle(&mut self, json_request: &str) -> Response {
        let result = Request::parse(json_request).and_then(|request| self.dispatch(request));

        match result {
            Ok(data) => Response::success(data),
            Err(e) => Response::error(&e),
        }
    }

    fn dispatch(&mut self, request: Request) -> ApiResult<Value> {
        match request {
            Request::List => Ok(to_value(&self.book.contacts())?),
            Request::Get { id } => Ok(to_value(&self.book.contact(id)?)?),
            Request::Create { fields } => Ok(to_value(&self.book.add(&fields)?)?),
            Request::Update { id, fields } => Ok(to_value(&self.book.edit(id, &fields)?)?),
            Request::Delete { id } => {
                self.book.remove(id)?;
                Ok(json!({ "deleted": id }))
            }
            Request::Validate { fields } => {
                self.book.check(&fields).map_err(|f| ApiError::from_book_error(f.into()))?;
                Ok(json!({ "valid": true }))
            }
        }
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> ApiResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::invalid_request(format!("Unserializable response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemorySlots, RecordStore, DEFAULT_SLOT};

    const ASHA: &str = r#"{"firstName":"Asha","lastName":"Rao","email":"asha.rao@mail.com",
        "phone":"9876543210","streetAddr":"12 MG Road","postCode":"560034",
        "city":"Bengaluru","state":"Karnataka","labels":""}"#;

    fn book() -> AddressBook<MemorySlots> {
        AddressBook::new(RecordStore::open(MemorySlots::new(), DEFAULT_SLOT).unwrap())
    }

    fn parse(response: &Response) -> Value {
        serde_json::from_str(&response.to_json()).unwrap()
    }

    #[test]
    fn test_create_then_list() {
        let mut book = book();
        let mut handler = ApiHandler::new(&mut book);

        let created = handler.handle(&format!(r#"{{"op":"create","fields":{}}}"#, ASHA));
        assert!(created.is_success());
        assert_eq!(parse(&created)["data"]["id"], 1);

        let listed = parse(&handler.handle(r#"{"op":"list"}"#));
        assert_eq!(listed["data"].as_array().unwrap().len(), 1);
        assert_eq!(listed["data"][0]["streetAddr"], "12 MG Road");
    }

    #[test]
    fn test_validation_failure_lists_fields() {
        let mut book = book();
        let mut handler = ApiHandler::new(&mut book);

        let response = parse(&handler.handle(
            r#"{"op":"create","fields":{"firstName":"Asha","email":"bad@@domain"}}"#,
        ));

        assert_eq!(response["code"], "ADDRBOOK_VALIDATION_FAILED");
        let fields: Vec<&str> = response["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            fields,
            vec!["lastName", "email", "phone", "streetAddr", "postCode", "city"]
        );
    }

    #[test]
    fn test_delete_unknown() {
        let mut book = book();
        let mut handler = ApiHandler::new(&mut book);

        let response = parse(&handler.handle(r#"{"op":"delete","id":5}"#));
        assert_eq!(response["code"], "ADDRBOOK_NOT_FOUND");
    }

    #[test]
    fn test_validate_does_not_store() {
        let mut book = book();
        {
            let mut handler = ApiHandler::new(&mut book);
            let response =
                parse(&handler.handle(&format!(r#"{{"op":"validate","fields":{}}}"#, ASHA)));
            assert_eq!(response["data"]["valid"], true);
        }
        assert!(book.contacts().is_empty());
    }

    #[test]
    fn test_update_and_get() {
        let mut book = book();
        let mut handler = ApiHandler::new(&mut book);
        handler.handle(&format!(r#"{{"op":"create","fields":{}}}"#, ASHA));

        let edited = ASHA.replace("\"labels\":\"\"", "\"labels\":\"family\"");
        let response = handler.handle(&format!(r#"{{"op":"update","id":1,"fields":{}}}"#, edited));
        assert!(response.is_success());

        let fetched = parse(&handler.handle(r#"{"op":"get","id":1}"#));
        assert_eq!(fetched["data"]["labels"], "family");
    }
}
