//! Tab router and the one-shot "new sale" navigation command.

use crate::errors::{AppError, AppResult};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Customers,
    Sales,
    AfterSales,
    Visits,
    Reports,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Dashboard,
        Tab::Customers,
        Tab::Sales,
        Tab::AfterSales,
        Tab::Visits,
        Tab::Reports,
        Tab::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Customers => "customers",
            Tab::Sales => "sales",
            Tab::AfterSales => "aftersales",
            Tab::Visits => "visits",
            Tab::Reports => "reports",
            Tab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Painel Geral",
            Tab::Customers => "Meus Clientes",
            Tab::Sales => "Vendas Realizadas",
            Tab::AfterSales => "Pós-Venda",
            Tab::Visits => "Visitas",
            Tab::Reports => "Relatórios",
            Tab::Settings => "Minha Conta",
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        let needle = s.trim().to_lowercase().replace(['-', '_'], "");
        Tab::ALL
            .into_iter()
            .find(|t| t.id() == needle)
            .ok_or_else(|| AppError::InvalidTab(s.to_string()))
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// "Start a new sale for this customer, superseding that sale."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSaleIntent {
    pub customer_id: String,
    pub replacing_sale_id: Option<String>,
}

#[derive(Debug, Default)]
pub struct Navigator {
    active: Tab,
    pending: Option<NewSaleIntent>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Plain tab switch. Leaving for any tab other than sales drops a pending
    /// new-sale intent, so it can never resurface on a later visit.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab != Tab::Sales {
            self.pending = None;
        }
        self.active = tab;
    }

    /// Queue a new-sale intent and switch to the sales tab. Any earlier
    /// intent is replaced as a whole.
    pub fn navigate_to_new_sale(
        &mut self,
        customer_id: impl Into<String>,
        replacing_sale_id: Option<String>,
    ) {
        self.pending = Some(NewSaleIntent {
            customer_id: customer_id.into(),
            replacing_sale_id,
        });
        self.active = Tab::Sales;
    }

    pub fn preselected_customer_id(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.customer_id.as_str())
    }

    pub fn replacing_sale_id(&self) -> Option<&str> {
        self.pending
            .as_ref()
            .and_then(|p| p.replacing_sale_id.as_deref())
    }

    pub fn pending_intent(&self) -> Option<&NewSaleIntent> {
        self.pending.as_ref()
    }

    /// Deliver the pending intent to the sales view. Delivery consumes it.
    pub fn take_sales_intent(&mut self) -> Option<NewSaleIntent> {
        if self.active == Tab::Sales {
            self.pending.take()
        } else {
            None
        }
    }

    /// Put back an intent whose sale could not be created, so the form can
    /// be submitted again. Ignored once the sales tab has been left.
    pub fn restore_intent(&mut self, intent: NewSaleIntent) {
        if self.active == Tab::Sales {
            self.pending = Some(intent);
        }
    }

    /// Completion callback from the sales view. The active tab is kept.
    pub fn on_sale_created(&mut self) {
        self.pending = None;
    }
}
