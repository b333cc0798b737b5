//! In-memory entity store for tests.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::{
    models::{
        Admin, AdminId, Allocation, AllocationDetails, AllocationId, Employee, EmployeeId,
        EmployeeRecord, EntityRef, NewAllocation, NewTask, NewTimeLog, Project, ProjectId, Task,
        TaskId, TimeLog, TimeLogDetails, TimeLogFilter, TimeLogId,
    },
    ports::outbound::{
        AdminRepository, AllocationRepository, EmployeeRepository, ProjectRepository,
        TaskRepository, TimeLogRepository,
    },
    Email, WorkforceError,
};

struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Default)]
struct Tables {
    employees: Table<Employee>,
    projects: Table<Project>,
    tasks: Table<Task>,
    allocations: Table<Allocation>,
    time_logs: Table<TimeLog>,
    admins: Table<Admin>,
}

/// Mock entity store backed by in-memory maps.
///
/// Enforces unique emails like the database does, but not foreign keys, so
/// tests exercise the service-level integrity checks on their own.
#[derive(Clone, Default)]
pub struct MockEntityStore {
    tables: Arc<RwLock<Tables>>,
}

impl MockEntityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn references(
    target: EntityRef,
    employee_id: EmployeeId,
    project_id: ProjectId,
    task_id: TaskId,
) -> bool {
    match target {
        EntityRef::Employee(id) => id == employee_id,
        EntityRef::Project(id) => id == project_id,
        EntityRef::Task(id) => id == task_id,
    }
}

#[async_trait]
impl EmployeeRepository for MockEntityStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, WorkforceError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.employees.rows.values().cloned().collect())
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>, WorkforceError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.employees.rows.get(&id.as_i32()).cloned())
    }

    async fn find_employee_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Employee>, WorkforceError> {
        let tables = self.tables.read().unwrap();
        Ok(tables
            .employees
            .rows
            .values()
            .find(|e| e.email.as_ref() == Some(email))
            .cloned())
    }

    async fn create_employee(
        &self,
        employee: &EmployeeRecord,
    ) -> Result<Employee, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        ensure_unique_email(&tables, employee.email.as_ref(), None)?;

        let id = EmployeeId::new(tables.employees.next_id());
        let created = Employee {
            id,
            name: employee.name.clone(),
            hourly_rate: employee.hourly_rate,
            email: employee.email.clone(),
            password_hash: employee.password_hash.clone(),
        };
        tables.employees.rows.insert(id.as_i32(), created.clone());

        Ok(created)
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        employee: &EmployeeRecord,
    ) -> Result<Option<Employee>, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        ensure_unique_email(&tables, employee.email.as_ref(), Some(id))?;

        let Some(existing) = tables.employees.rows.get_mut(&id.as_i32()) else {
            return Ok(None);
        };
        existing.name = employee.name.clone();
        existing.hourly_rate = employee.hourly_rate;
        existing.email = employee.email.clone();
        if let Some(hash) = &employee.password_hash {
            existing.password_hash = Some(hash.clone());
        }

        Ok(Some(existing.clone()))
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<bool, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        Ok(tables.employees.rows.remove(&id.as_i32()).is_some())
    }
}

fn ensure_unique_email(
    tables: &Tables,
    email: Option<&Email>,
    except: Option<EmployeeId>,
) -> Result<(), WorkforceError> {
    let Some(email) = email else {
        return Ok(());
    };

    let taken = tables
        .employees
        .rows
        .values()
        .any(|e| e.email.as_ref() == Some(email) && Some(e.id) != except);

    if taken {
        Err(WorkforceError::Conflict(format!("email {email} is already in use")))
    } else {
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for MockEntityStore {
    async fn list_projects(&self) -> Result<Vec<Project>, WorkforceError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.projects.rows.values().cloned().collect())
    }

    async fn get_project(&self, id: ProjectId) -> Result<Option<Project>, WorkforceError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.projects.rows.get(&id.as_i32()).cloned())
    }

    async fn create_project(&self, name: &str) -> Result<Project, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        let id = tables.projects.next_id();
        let project = Project::new(id, name);
        tables.projects.rows.insert(id, project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        id: ProjectId,
        name: &str,
    ) -> Result<Option<Project>, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        Ok(tables.projects.rows.get_mut(&id.as_i32()).map(|project| {
            project.name = name.to_string();
            project.clone()
        }))
    }

    async fn delete_project(&self, id: ProjectId) -> Result<bool, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        Ok(tables.projects.rows.remove(&id.as_i32()).is_some())
    }
}

#[async_trait]
impl TaskRepository for MockEntityStore {
    async fn list_tasks(&self, project_id: Option<ProjectId>) -> Result<Vec<Task>, WorkforceError> {
        let tables = self.tables.read().unwrap();
        Ok(tables
            .tasks
            .rows
            .values()
            .filter(|task| project_id.map_or(true, |id| task.project_id == id))
            .cloned()
            .collect())
    }

    async fn get_task(&self, id: TaskId) -> Result<Option<Task>, WorkforceError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.tasks.rows.get(&id.as_i32()).cloned())
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        let id = tables.tasks.next_id();
        let created = Task::new(id, task.project_id, task.name.clone());
        tables.tasks.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn update_task(
        &self,
        id: TaskId,
        task: &NewTask,
    ) -> Result<Option<Task>, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        Ok(tables.tasks.rows.get_mut(&id.as_i32()).map(|existing| {
            existing.project_id = task.project_id;
            existing.name = task.name.clone();
            existing.clone()
        }))
    }

    async fn delete_task(&self, id: TaskId) -> Result<bool, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        Ok(tables.tasks.rows.remove(&id.as_i32()).is_some())
    }

    async fn count_tasks_for_project(&self, project_id: ProjectId) -> Result<i64, WorkforceError> {
        let tables = self.tables.read().unwrap();
        let count = tables
            .tasks
            .rows
            .values()
            .filter(|task| task.project_id == project_id)
            .count();
        Ok(count as i64)
    }
}

#[async_trait]
impl AllocationRepository for MockEntityStore {
    async fn list_allocations(&self) -> Result<Vec<AllocationDetails>, WorkforceError> {
        let tables = self.tables.read().unwrap();
        let mut details: Vec<AllocationDetails> = tables
            .allocations
            .rows
            .values()
            .filter_map(|a| {
                let employee = tables.employees.rows.get(&a.employee_id.as_i32())?;
                let project = tables.projects.rows.get(&a.project_id.as_i32())?;
                let task = tables.tasks.rows.get(&a.task_id.as_i32())?;
                Some(AllocationDetails {
                    allocation: a.clone(),
                    employee_name: employee.name.clone(),
                    project_name: project.name.clone(),
                    task_name: task.name.clone(),
                })
            })
            .collect();

        details.sort_by(|a, b| {
            b.allocation
                .date
                .cmp(&a.allocation.date)
                .then(a.allocation.id.cmp(&b.allocation.id))
        });

        Ok(details)
    }

    async fn get_allocation(
        &self,
        id: AllocationId,
    ) -> Result<Option<Allocation>, WorkforceError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.allocations.rows.get(&id.as_i32()).cloned())
    }

    async fn create_allocation(
        &self,
        allocation: &NewAllocation,
    ) -> Result<Allocation, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        let id = AllocationId::new(tables.allocations.next_id());
        let created = Allocation {
            id,
            employee_id: allocation.employee_id,
            project_id: allocation.project_id,
            task_id: allocation.task_id,
            allocated_hours: allocation.allocated_hours,
            date: allocation.date,
            status: allocation.status,
        };
        tables.allocations.rows.insert(id.as_i32(), created.clone());
        Ok(created)
    }

    async fn update_allocation(
        &self,
        id: AllocationId,
        allocation: &NewAllocation,
    ) -> Result<Option<Allocation>, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        Ok(tables.allocations.rows.get_mut(&id.as_i32()).map(|existing| {
            existing.employee_id = allocation.employee_id;
            existing.project_id = allocation.project_id;
            existing.task_id = allocation.task_id;
            existing.allocated_hours = allocation.allocated_hours;
            existing.date = allocation.date;
            existing.status = allocation.status;
            existing.clone()
        }))
    }

    async fn delete_allocation(&self, id: AllocationId) -> Result<bool, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        Ok(tables.allocations.rows.remove(&id.as_i32()).is_some())
    }

    async fn count_allocations_referencing(
        &self,
        target: EntityRef,
    ) -> Result<i64, WorkforceError> {
        let tables = self.tables.read().unwrap();
        let count = tables
            .allocations
            .rows
            .values()
            .filter(|a| references(target, a.employee_id, a.project_id, a.task_id))
            .count();
        Ok(count as i64)
    }
}

#[async_trait]
impl TimeLogRepository for MockEntityStore {
    async fn list_time_logs(
        &self,
        filter: &TimeLogFilter,
    ) -> Result<Vec<TimeLogDetails>, WorkforceError> {
        let tables = self.tables.read().unwrap();
        let mut details: Vec<TimeLogDetails> = tables
            .time_logs
            .rows
            .values()
            .filter(|log| filter.matches(log))
            .filter_map(|log| {
                let employee = tables.employees.rows.get(&log.employee_id.as_i32())?;
                let project = tables.projects.rows.get(&log.project_id.as_i32())?;
                let task = tables.tasks.rows.get(&log.task_id.as_i32())?;
                Some(TimeLogDetails {
                    log: log.clone(),
                    employee_name: employee.name.clone(),
                    project_name: project.name.clone(),
                    task_name: task.name.clone(),
                    hourly_rate: employee.hourly_rate,
                })
            })
            .collect();

        details.sort_by(|a, b| b.log.date.cmp(&a.log.date).then(a.log.id.cmp(&b.log.id)));

        Ok(details)
    }

    async fn get_time_log(&self, id: TimeLogId) -> Result<Option<TimeLog>, WorkforceError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.time_logs.rows.get(&id.as_i32()).cloned())
    }

    async fn create_time_log(&self, log: &NewTimeLog) -> Result<TimeLog, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        let id = TimeLogId::new(tables.time_logs.next_id());
        let created = TimeLog {
            id,
            employee_id: log.employee_id,
            project_id: log.project_id,
            task_id: log.task_id,
            date: log.date,
            start_time: log.start_time,
            end_time: log.end_time,
        };
        tables.time_logs.rows.insert(id.as_i32(), created.clone());
        Ok(created)
    }

    async fn update_time_log(
        &self,
        id: TimeLogId,
        log: &NewTimeLog,
    ) -> Result<Option<TimeLog>, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        Ok(tables.time_logs.rows.get_mut(&id.as_i32()).map(|existing| {
            existing.employee_id = log.employee_id;
            existing.project_id = log.project_id;
            existing.task_id = log.task_id;
            existing.date = log.date;
            existing.start_time = log.start_time;
            existing.end_time = log.end_time;
            existing.clone()
        }))
    }

    async fn delete_time_log(&self, id: TimeLogId) -> Result<bool, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        Ok(tables.time_logs.rows.remove(&id.as_i32()).is_some())
    }

    async fn count_time_logs_referencing(
        &self,
        target: EntityRef,
    ) -> Result<i64, WorkforceError> {
        let tables = self.tables.read().unwrap();
        let count = tables
            .time_logs
            .rows
            .values()
            .filter(|log| references(target, log.employee_id, log.project_id, log.task_id))
            .count();
        Ok(count as i64)
    }
}

#[async_trait]
impl AdminRepository for MockEntityStore {
    async fn get_admin(&self, id: AdminId) -> Result<Option<Admin>, WorkforceError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.admins.rows.get(&id.as_i32()).cloned())
    }

    async fn find_admin_by_email(&self, email: &Email) -> Result<Option<Admin>, WorkforceError> {
        let tables = self.tables.read().unwrap();
        Ok(tables
            .admins
            .rows
            .values()
            .find(|admin| &admin.email == email)
            .cloned())
    }

    async fn count_admins(&self) -> Result<i64, WorkforceError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.admins.rows.len() as i64)
    }

    async fn create_admin(
        &self,
        email: &Email,
        password_hash: &str,
    ) -> Result<Admin, WorkforceError> {
        let mut tables = self.tables.write().unwrap();
        if tables.admins.rows.values().any(|admin| &admin.email == email) {
            return Err(WorkforceError::Conflict(format!(
                "email {email} is already in use"
            )));
        }

        let id = AdminId::new(tables.admins.next_id());
        let admin = Admin {
            id,
            email: email.clone(),
            password_hash: password_hash.to_string(),
        };
        tables.admins.rows.insert(id.as_i32(), admin.clone());
        Ok(admin)
    }
}
