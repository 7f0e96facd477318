use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::ValidationResult as RustValidationResult;
use crate::AnswerValidator as RustAnswerValidator;

/// Python wrapper for AnswerValidator
#[pyclass]
struct AnswerValidator {
    validator: RustAnswerValidator,
}

#[pymethods]
impl AnswerValidator {
    /// Create new AnswerValidator
    #[new]
    fn new() -> PyResult<Self> {
        let validator = RustAnswerValidator::new()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))?;

        Ok(Self { validator })
    }

    /// Validate an answer; returns a dict with is_correct/confidence/
    /// method/explanation
    fn validate(
        &self,
        user_answer: String,
        correct_answer: String,
        subject: Option<String>,
    ) -> PyResult<PyObject> {
        let verdict = self.validator.validate(
            &user_answer,
            &correct_answer,
            subject.as_deref().unwrap_or(""),
        );

        Python::with_gil(|py| validation_result_to_py(py, &verdict))
    }

    /// Validate against the expected answer and its accepted alternatives
    fn validate_with_alternatives(
        &self,
        user_answer: String,
        correct_answer: String,
        alternatives: Vec<String>,
        subject: Option<String>,
    ) -> PyResult<PyObject> {
        let verdict = self.validator.validate_with_alternatives(
            &user_answer,
            &correct_answer,
            &alternatives,
            subject.as_deref().unwrap_or(""),
        );

        Python::with_gil(|py| validation_result_to_py(py, &verdict))
    }

    /// Whether full fuzzy-matching capability is available
    fn is_ready(&self) -> bool {
        self.validator.is_ready()
    }
}

/// Convert ValidationResult to Python dict
fn validation_result_to_py(py: Python, verdict: &RustValidationResult) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    dict.set_item("is_correct", verdict.is_correct)?;
    dict.set_item("confidence", verdict.confidence)?;
    dict.set_item("method", format!("{:?}", verdict.method).to_lowercase())?;
    dict.set_item("explanation", &verdict.explanation)?;
    Ok(dict.into())
}

/// Python module
#[pymodule]
fn pilearn_answer_engine(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<AnswerValidator>()?;
    m.add("__version__", crate::VERSION)?;
    Ok(())
}
