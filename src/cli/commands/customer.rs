use crate::cli::commands::{log_op, open_session};
use crate::cli::parser::CustomerAction;
use crate::config::Config;
use crate::core::customers::{CustomerLogic, CustomerPatch};
use crate::errors::AppResult;
use crate::models::Customer;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;
use crate::ui::views;
use crate::utils::ids::new_id;

fn non_empty(v: &Option<String>) -> Option<String> {
    v.as_ref()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub fn handle(action: &CustomerAction, cfg: &Config) -> AppResult<()> {
    let mut store = open_session(cfg)?;

    match action {
        CustomerAction::Add {
            name,
            phone,
            email,
            address,
            city,
            notes,
            id,
        } => {
            let id = id
                .clone()
                .unwrap_or_else(|| new_id(|candidate| store.customer(candidate).is_some()));

            let mut customer = Customer::new(id, name.trim(), phone.trim());
            customer.email = non_empty(email);
            customer.address = non_empty(address);
            customer.city = non_empty(city);
            customer.notes = non_empty(notes);

            let (cid, cname) = (customer.id.clone(), customer.name.clone());
            CustomerLogic::add(&mut store, customer)?;

            log_op(&store, "add", &cid, &format!("Customer '{}' added", cname));
            success(format!("Customer '{}' added (id {}).", cname, cid));
        }

        CustomerAction::List { search, notes } => {
            let listed: Vec<&Customer> = match search {
                Some(term) => CustomerLogic::search(store.customers(), term),
                None => store.customers().iter().collect(),
            };
            print!("{}", views::customers_table(&listed, *notes || cfg.show_notes));
        }

        CustomerAction::Edit {
            id,
            name,
            phone,
            email,
            address,
            city,
            notes,
        } => {
            let patch = CustomerPatch {
                name: name.clone(),
                phone: phone.clone(),
                email: email.clone(),
                address: address.clone(),
                city: city.clone(),
                notes: notes.clone(),
            };

            let updated = CustomerLogic::edit(&mut store, id, patch)?;
            log_op(&store, "edit", id, &format!("Customer '{}' updated", updated.name));
            success(format!("Customer '{}' updated.", updated.name));
        }

        CustomerAction::Del { id, yes } => {
            let Some(customer) = store.customer(id) else {
                warning(format!("Customer not found: {}", id));
                return Ok(());
            };

            let prompt = format!("Delete customer '{}' ({})?", customer.name, id);
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = CustomerLogic::delete(&mut store, id)?;
            log_op(&store, "del", id, &format!("Customer '{}' deleted", removed.name));
            success(format!("Customer '{}' deleted.", removed.name));
        }
    }

    Ok(())
}
