use maud::{DOCTYPE, Markup, html};
use platform_api::Notification;
use products_hr::{EmployeeForm, EmployeeTable, render};

/// The directory page: create form, list trigger and the employees table.
pub fn directory_page(
    form: &EmployeeForm,
    table: &EmployeeTable,
    notification: Option<Notification>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Employee Directory" }
                link rel="stylesheet" href="https://fonts.googleapis.com/icon?family=Material+Icons";
            }
            body {
                h1 { "Employee Directory" }
                @if let Some(notification) = notification {
                    div id="notification" class=(format!("alert {}", notification.message())) role="alert" {
                        (notification.message())
                    }
                }
                form id="createEmployeeForm" method="post" action="/employees" {
                    (field("id", "Employee ID", &form.employee_id))
                    (field("name", "Name", &form.name))
                    (field("email", "Email", &form.email))
                    (field("address", "Address", &form.address))
                    (field("phone", "Phone", &form.phone))
                    button type="submit" { "Add Employee" }
                }
                form method="get" action="/employees" {
                    button id="getEmployees" type="submit" { "View all Employees" }
                }
                (render::table_html(table))
            }
        }
    }
}

fn field(id: &str, label: &str, value: &str) -> Markup {
    html! {
        label for=(id) { (label) }
        input type="text" id=(id) name=(id) value=(value);
    }
}
