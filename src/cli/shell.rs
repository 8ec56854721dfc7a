//! Interactive session: the session gate in front of the seven-tab router.
//!
//! Each line read from the input is one command. Errors are printed and the
//! loop goes on; only `quit` or end of input stop it.

use crate::cli::commands::sale::{announce, check_replacement, new_sale_id, record};
use crate::cli::commands::{AppStore, log_op};
use crate::cli::forms::{collect_items, parse_amount};
use crate::config::Config;
use crate::core::aftersales::{AfterSalesLogic, due_sales};
use crate::core::dashboard::Dashboard;
use crate::core::navigation::{Navigator, Tab};
use crate::core::sales::SaleDraft;
use crate::core::session::SessionGate;
use crate::core::visits::VisitLogic;
use crate::errors::{AppError, AppResult};
use crate::models::Customer;
use crate::ui::messages::{error, header, info, success, warning};
use crate::ui::views;
use crate::utils::date::today;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  tab <name>                      switch tab (dashboard, customers, sales, aftersales, visits, reports, settings)
  tabs                            list tabs
  show                            render the active tab
  new-sale <customer-id> [sale]   open the sales tab with a customer preselected
  renew <sale-id>                 new sale for the same customer, superseding that sale
  sell <amount> [description]     record a sale for the preselected customer
  sell-to <customer-id> <amount> [description]
  contact <sale-id>               record a follow-up contact today
  theme                           switch light/dark
  login | logout | status
  help | quit
";

enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    store: AppStore,
    nav: Navigator,
    currency: String,
    show_notes: bool,
}

impl Shell {
    pub fn new(store: AppStore, cfg: &Config) -> Self {
        Self {
            store,
            nav: Navigator::new(),
            currency: cfg.currency_symbol.clone(),
            show_notes: cfg.show_notes,
        }
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> AppResult<()> {
        info("Controlarva shell. Type 'help' for commands.");
        if !self.store.is_authenticated() {
            warning("Not logged in. Type 'login' to open a session.");
        }

        self.prompt();
        for line in input.lines() {
            let line = line?;
            match self.execute(line.trim()) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => error(e),
            }
            self.prompt();
        }
        println!();
        Ok(())
    }

    fn prompt(&self) {
        print!("[{}] > ", self.nav.active().label());
        let _ = io::stdout().flush();
    }

    fn execute(&mut self, line: &str) -> AppResult<Flow> {
        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else {
            return Ok(Flow::Continue);
        };
        let args: Vec<&str> = words.collect();

        // ungated commands
        match cmd {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => {
                print!("{HELP}");
                return Ok(Flow::Continue);
            }
            "login" => {
                SessionGate::login(&mut self.store)?;
                log_op(&self.store, "login", "", "Session opened (shell)");
                success(format!("Welcome, {}!", self.store.settings().user_name));
                return self.show();
            }
            "status" => {
                println!("Session: {}", SessionGate::state(&self.store).as_str());
                println!("Tab:     {} ({})", self.nav.active().label(), self.nav.active());
                if let Some(intent) = self.nav.pending_intent() {
                    println!(
                        "Pending new sale for {}{}",
                        intent.customer_id,
                        intent
                            .replacing_sale_id
                            .as_ref()
                            .map(|s| format!(", replacing {s}"))
                            .unwrap_or_default()
                    );
                }
                return Ok(Flow::Continue);
            }
            _ => {}
        }

        SessionGate::require(&self.store)?;

        match cmd {
            "logout" => {
                SessionGate::logout(&mut self.store)?;
                log_op(&self.store, "logout", "", "Session closed (shell)");
                success("Logged out.");
            }

            "tabs" => {
                for t in Tab::ALL {
                    let mark = if t == self.nav.active() { "*" } else { " " };
                    println!("{mark} {:<11} {}", t.id(), t.label());
                }
            }

            "tab" => {
                let name = args
                    .first()
                    .ok_or_else(|| AppError::InvalidTab(String::new()))?;
                self.nav.select_tab(Tab::parse(name)?);
                return self.show();
            }

            "show" => return self.show(),

            "new-sale" => {
                let customer_id = args.first().ok_or(AppError::NoCustomerSelected)?;
                let name = self.require_customer(customer_id)?.name.clone();
                let replacing = match args.get(1) {
                    Some(id) => {
                        check_replacement(&self.store, id, customer_id)?;
                        Some(id.to_string())
                    }
                    None => None,
                };
                self.nav
                    .navigate_to_new_sale(customer_id.to_string(), replacing);
                info(format!("New sale for {}.", name));
                return self.show();
            }

            "renew" => {
                let sale_id = args.first().ok_or_else(|| AppError::NotFound {
                    kind: "Sale",
                    id: String::new(),
                })?;
                AfterSalesLogic::renew(&self.store, &mut self.nav, sale_id)?;
                return self.show();
            }

            "sell" => self.sell(None, &args)?,

            "sell-to" => {
                let customer_id = args.first().ok_or(AppError::NoCustomerSelected)?;
                self.sell(Some(customer_id.to_string()), &args[1..])?;
            }

            "contact" => {
                let sale_id = args.first().ok_or_else(|| AppError::NotFound {
                    kind: "Sale",
                    id: String::new(),
                })?;
                let when = today();
                AfterSalesLogic::mark_contacted(&mut self.store, sale_id, when)?;
                log_op(&self.store, "contact", sale_id, &format!("Follow-up contact on {}", when));
                success(format!("Contact on {} recorded for sale {}.", when, sale_id));
            }

            "theme" => {
                let theme = self.store.toggle_theme()?;
                log_op(&self.store, "settings", "theme", &format!("Theme set to {}", theme.as_str()));
                success(format!("Theme switched to {}.", theme.as_str()));
            }

            other => warning(format!("Unknown command '{}'. Type 'help'.", other)),
        }

        Ok(Flow::Continue)
    }

    fn require_customer(&self, id: &str) -> AppResult<&Customer> {
        self.store.customer(id).ok_or_else(|| AppError::NotFound {
            kind: "Customer",
            id: id.to_string(),
        })
    }

    /// Submit the sales form: `<amount> [description]`.
    fn sell(&mut self, customer_id: Option<String>, args: &[&str]) -> AppResult<()> {
        let amount = args
            .first()
            .ok_or_else(|| AppError::InvalidAmount("missing amount".into()))?;
        parse_amount(amount)?;

        let description = if args.len() > 1 {
            args[1..].join(" ")
        } else {
            "Venda".to_string()
        };

        let draft = SaleDraft {
            id: new_sale_id(&self.store),
            customer_id,
            date: today(),
            items: collect_items(&[], Some(*amount), &description)?,
            notes: None,
        };

        let created = record(&mut self.store, &mut self.nav, draft)?;
        announce(&self.store, &created.sale, &self.currency);
        if let Some(old) = created.renewed {
            log_op(&self.store, "renew", &old, &format!("Renewed by sale {}", created.sale.id));
            info(format!("Sale {} marked as renewed.", old));
        }
        Ok(())
    }

    fn show(&self) -> AppResult<Flow> {
        print!("{}", self.render());
        Ok(Flow::Continue)
    }

    /// Text for the active tab.
    pub fn render(&self) -> String {
        let state = self.store.state();
        let tab = self.nav.active();
        header(tab.label());

        match tab {
            Tab::Dashboard => {
                let summary = Dashboard::build(state, today());
                views::dashboard(&summary, &state.settings, &self.currency)
            }
            Tab::Customers => {
                let all: Vec<&Customer> = state.customers.iter().collect();
                views::customers_table(&all, self.show_notes)
            }
            Tab::Sales => {
                let mut out = String::new();
                if let Some(intent) = self.nav.pending_intent() {
                    let name = self
                        .store
                        .customer(&intent.customer_id)
                        .map(|c| c.name.as_str())
                        .unwrap_or(intent.customer_id.as_str());
                    out.push_str(&format!("New sale for {}", name));
                    if let Some(old) = &intent.replacing_sale_id {
                        out.push_str(&format!(" (replacing sale {})", old));
                    }
                    out.push_str(". Use 'sell <amount> [description]'.\n\n");
                }
                out.push_str(&views::sales_table(
                    &state.sales,
                    &state.customers,
                    &self.currency,
                ));
                out
            }
            Tab::AfterSales => {
                let due = due_sales(
                    &state.sales,
                    today(),
                    state.settings.contact_interval_days,
                );
                views::due_table(&due, &state.customers, &self.currency)
            }
            Tab::Visits => views::visits_table(&VisitLogic::upcoming(&state.visits, today())),
            Tab::Reports => views::report(state, &self.currency),
            Tab::Settings => views::settings_view(&state.settings),
        }
    }
}

/// Entry point of the `shell` command.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = crate::cli::commands::open_store(cfg)?;
    let mut shell = Shell::new(store, cfg);
    let stdin = io::stdin();
    shell.run(stdin.lock())
}
