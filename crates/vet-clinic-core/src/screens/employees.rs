//! Employee list screen.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::api::ClinicApi;
use crate::fetch::{FetchState, Fetcher};
use crate::models::Employee;
use crate::render::{RenderText, ScreenView, TableRow, TableView};

/// Column headers of the employee table. The last column holds the host's
/// row actions and has no data cell.
pub const EMPLOYEE_TABLE_HEADS: [&str; 13] = [
    "Rut",
    "Nombres",
    "Paterno",
    "Materno",
    "Fecha nacimiento",
    "Direccion",
    "Telefono",
    "Correo",
    "Sexo",
    "Estado",
    "Cargo",
    "Especialidad",
    "Operaciones",
];

impl TableRow for Employee {
    fn cells(&self) -> Vec<String> {
        self.table_cells()
    }
}

/// Employee rows under the fixed headers, in source order.
pub fn employee_table(employees: &[Employee]) -> TableView {
    TableView::new(&EMPLOYEE_TABLE_HEADS, employees)
}

/// The employee list.
///
/// Failures surface the same way as on the pet history modal.
pub struct EmployeeListScreen<A: ClinicApi + ?Sized + 'static> {
    api: Arc<A>,
    fetcher: Fetcher<Vec<Employee>>,
}

impl<A: ClinicApi + ?Sized + 'static> EmployeeListScreen<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            fetcher: Fetcher::new("employees"),
        }
    }

    /// Fetch the full collection.
    pub fn load(&mut self) -> JoinHandle<()> {
        tracing::info!("loading employee list");
        let api = Arc::clone(&self.api);
        self.fetcher.start(async move {
            let employees = api.employees().await?;
            tracing::debug!(count = employees.len(), "employees received");
            Ok::<_, crate::api::ApiError>(employees)
        })
    }

    pub fn close(&mut self) {
        self.fetcher.cancel();
    }

    pub fn state(&self) -> FetchState<Vec<Employee>> {
        self.fetcher.snapshot()
    }

    pub fn view(&self) -> ScreenView<TableView> {
        ScreenView::from_state(self.state(), |employees| employee_table(&employees))
    }

    pub fn render(&self) -> String {
        self.view().render_text()
    }
}
