//! In-memory transport and page builders for unit tests

use crate::fetch::{FormRequest, Transport};
use crate::TransportError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves canned bodies and records every request it receives
#[derive(Default)]
pub struct MockTransport {
    responses: HashMap<FormRequest, Result<String, String>>,
    requests: Mutex<Vec<FormRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, request: FormRequest, body: String) -> Self {
        self.responses.insert(request, Ok(body));
        self
    }

    pub fn fail(mut self, request: FormRequest, message: &str) -> Self {
        self.responses.insert(request, Err(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<FormRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    async fn fetch(&self, request: &FormRequest) -> Result<String, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.responses.get(request) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(message)) => Err(TransportError::Other(message.clone())),
            None => Err(TransportError::Other(format!("no response for {:?}", request))),
        }
    }
}

/// Renders the semester radio buttons and the program selection list
///
/// `checked` is the ID of the radio input the page marks as current.
pub fn selection_html(checked: &str, winter_year: i32, summer_year: i32, options: &[(&str, &str, &str)]) -> String {
    let radio = |id: &str| {
        if id == checked {
            format!(r#"<input type="radio" id="{}" checked>"#, id)
        } else {
            format!(r#"<input type="radio" id="{}">"#, id)
        }
    };

    let group = |degree: &str| {
        let entries: String = options
            .iter()
            .filter(|(d, _, _)| *d == degree)
            .map(|(_, id, text)| format!(r#"<option value="{}">{}</option>"#, id, text))
            .collect();
        format!(r#"<optgroup label="{}">{}</optgroup>"#, degree, entries)
    };

    format!(
        r#"{}<label for="inlineWintersemester">Wintersemester {}/{}</label>
        {}<label for="inlineSommersemester">Sommersemester {}</label>
        <select id="select_S">{}{}</select>"#,
        radio("inlineWintersemester"),
        winter_year,
        winter_year + 1,
        radio("inlineSommersemester"),
        summer_year,
        group("Bachelor"),
        group("Master"),
    )
}

/// A catalog page for one cycle
pub fn catalog_page(summer: bool, options: &[(&str, &str, &str)]) -> String {
    let checked = if summer {
        "inlineSommersemester"
    } else {
        "inlineWintersemester"
    };
    format!(
        "<html><body><form>{}</form></body></html>",
        selection_html(checked, 2023, 2024, options)
    )
}

/// A timetable page with a single Monday lecture from 8 to 12
pub fn timetable_page(summer: bool, options: &[(&str, &str, &str)]) -> String {
    let checked = if summer {
        "inlineSommersemester"
    } else {
        "inlineWintersemester"
    };
    format!(
        r#"<html><body><form>{}</form>
        <table>
          <thead><tr><th>Tag</th><th>08-10</th><th>10-12</th></tr></thead>
          <tbody>
            <tr>
              <td class="text-center">Mo</td>
              <td title="Analysis I/Prof. Mustermann" colspan="2">ANA1 V Must R101</td>
            </tr>
          </tbody>
        </table></body></html>"#,
        selection_html(checked, 2023, 2024, options)
    )
}
