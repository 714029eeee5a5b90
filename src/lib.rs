#[cfg(feature = "python")]
use numpy::{PyArray1, PyArray2, PyReadonlyArray1, PyReadonlyArray2};
#[cfg(feature = "python")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod action_space;
pub mod agents;
pub mod distance;
pub mod error;
pub mod policy;
pub mod q_value;
pub mod speed_test_config;
pub mod state;
pub mod transition;

pub use action_space::{build_action_space, Action, ActionSpace};
pub use distance::distance;
pub use error::{PolicyError, Result};
pub use policy::action_distribution;
pub use q_value::q_value;
pub use state::{apply_action, Point};
pub use transition::transition;

#[cfg(feature = "python")]
impl From<PolicyError> for PyErr {
    fn from(err: PolicyError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(feature = "python")]
fn point_from_py(arr: &PyReadonlyArray1<f64>) -> PyResult<Point> {
    let view = arr.as_array();
    if view.len() != 2 {
        return Err(PyValueError::new_err(format!(
            "expected a 2-element point, got {} elements",
            view.len()
        )));
    }
    Ok(Point::new(view[0], view[1]))
}

#[cfg(feature = "python")]
fn action_from_py(arr: &PyReadonlyArray1<f64>) -> PyResult<Action> {
    let view = arr.as_array();
    if view.len() != 2 {
        return Err(PyValueError::new_err(format!(
            "expected a [distance, angle] action, got {} elements",
            view.len()
        )));
    }
    Ok(Action::new(view[0], view[1]))
}

#[cfg(feature = "python")]
fn action_space_from_py(arr: &PyReadonlyArray2<f64>) -> PyResult<ActionSpace> {
    let view = arr.as_array();
    if view.ncols() != 2 {
        return Err(PyValueError::new_err(format!(
            "expected an (N, 2) action array, got {} columns",
            view.ncols()
        )));
    }
    let actions = view
        .rows()
        .into_iter()
        .map(|row| Action::new(row[0], row[1]))
        .collect();
    Ok(ActionSpace::from_actions(actions))
}

#[cfg(feature = "python")]
fn point_to_py<'py>(py: Python<'py>, p: Point) -> Bound<'py, PyArray1<f64>> {
    PyArray1::from_vec_bound(py, vec![p.x, p.y])
}

/// Build the action space as an `(17, 2)` array of `[distance, angle]` rows.
#[cfg(feature = "python")]
#[pyfunction]
fn gen_aspace(py: Python<'_>) -> Bound<'_, PyArray2<f64>> {
    PyArray2::from_owned_array_bound(py, build_action_space().to_array())
}

/// Order-`p` Minkowski distance between two points.
#[cfg(feature = "python")]
#[pyfunction]
fn dist_to_pos(p1: PyReadonlyArray1<f64>, p2: PyReadonlyArray1<f64>, p: f64) -> PyResult<f64> {
    Ok(distance(point_from_py(&p1)?, point_from_py(&p2)?, p)?)
}

/// Move a state by a `[distance, angle]` action.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "apply_action")]
fn py_apply_action<'py>(
    py: Python<'py>,
    state: PyReadonlyArray1<f64>,
    action: PyReadonlyArray1<f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let next = apply_action(point_from_py(&state)?, &action_from_py(&action)?);
    Ok(point_to_py(py, next))
}

/// Q-value of an action from a state.
#[cfg(feature = "python")]
#[pyfunction]
fn compute_qval(state: PyReadonlyArray1<f64>, action: PyReadonlyArray1<f64>) -> PyResult<f64> {
    Ok(q_value(point_from_py(&state)?, &action_from_py(&action)?))
}

/// Softmax distribution over the rows of `aspace`.
#[cfg(feature = "python")]
#[pyfunction]
fn get_action_distribution<'py>(
    py: Python<'py>,
    beta: f64,
    state: PyReadonlyArray1<f64>,
    aspace: PyReadonlyArray2<f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let space = action_space_from_py(&aspace)?;
    let probs = action_distribution(beta, point_from_py(&state)?, &space)?;
    Ok(PyArray1::from_vec_bound(py, probs))
}

/// Sample one action under the softmax policy and return the new state.
/// Uses the thread-local generator.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "transition")]
fn py_transition<'py>(
    py: Python<'py>,
    state: PyReadonlyArray1<f64>,
    aspace: PyReadonlyArray2<f64>,
    beta: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let space = action_space_from_py(&aspace)?;
    let next = transition(
        point_from_py(&state)?,
        &space,
        beta,
        &mut rand::thread_rng(),
    )?;
    Ok(point_to_py(py, next))
}

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn boltzmann_nav(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(gen_aspace, m)?)?;
    m.add_function(wrap_pyfunction!(dist_to_pos, m)?)?;
    m.add_function(wrap_pyfunction!(py_apply_action, m)?)?;
    m.add_function(wrap_pyfunction!(compute_qval, m)?)?;
    m.add_function(wrap_pyfunction!(get_action_distribution, m)?)?;
    m.add_function(wrap_pyfunction!(py_transition, m)?)?;

    m.add("ACTION_SPACE_SIZE", action_space::ACTION_SPACE_SIZE)?;

    Ok(())
}
