use crate::core::store::Store;
use crate::db::storage::Storage;
use crate::errors::{AppError, AppResult};
use crate::models::Customer;

/// Optional field changes for `customer edit`. `Some("")` clears a field.
#[derive(Debug, Clone, Default)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
}

fn patch_optional(field: &mut Option<String>, value: Option<String>) {
    if let Some(v) = value {
        *field = if v.trim().is_empty() { None } else { Some(v) };
    }
}

pub struct CustomerLogic;

impl CustomerLogic {
    pub fn add<S: Storage>(store: &mut Store<S>, customer: Customer) -> AppResult<()> {
        if store.customer(&customer.id).is_some() {
            return Err(AppError::Duplicate {
                kind: "Customer",
                id: customer.id,
            });
        }
        store.update_customers(|c| c.push(customer))
    }

    pub fn edit<S: Storage>(
        store: &mut Store<S>,
        id: &str,
        patch: CustomerPatch,
    ) -> AppResult<Customer> {
        let mut updated = store.customer(id).cloned().ok_or_else(|| AppError::NotFound {
            kind: "Customer",
            id: id.to_string(),
        })?;

        if let Some(name) = patch.name {
            updated.name = name;
        }
        if let Some(phone) = patch.phone {
            updated.phone = phone;
        }
        patch_optional(&mut updated.email, patch.email);
        patch_optional(&mut updated.address, patch.address);
        patch_optional(&mut updated.city, patch.city);
        patch_optional(&mut updated.notes, patch.notes);

        let stored = updated.clone();
        store.update_customers(|customers| {
            if let Some(c) = customers.iter_mut().find(|c| c.id == id) {
                *c = stored;
            }
        })?;
        Ok(updated)
    }

    /// Remove a customer. Sales and visits pointing at it are left alone.
    pub fn delete<S: Storage>(store: &mut Store<S>, id: &str) -> AppResult<Customer> {
        let removed = store.customer(id).cloned().ok_or_else(|| AppError::NotFound {
            kind: "Customer",
            id: id.to_string(),
        })?;
        store.update_customers(|c| c.retain(|x| x.id != id))?;
        Ok(removed)
    }

    /// Case-insensitive match on name, phone, email or city.
    pub fn search<'a>(customers: &'a [Customer], term: &str) -> Vec<&'a Customer> {
        let needle = term.to_lowercase();
        customers
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.phone.contains(&needle)
                    || c.email
                        .as_deref()
                        .is_some_and(|e| e.to_lowercase().contains(&needle))
                    || c.city
                        .as_deref()
                        .is_some_and(|e| e.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Display name for a referenced customer id.
    pub fn display_name<'a>(customers: &'a [Customer], id: &str) -> &'a str {
        customers
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or("(removed customer)")
    }
}
