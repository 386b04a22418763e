// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap};
use shopdesk_app::{
    AppCommand, AppMode, AppState, Customer, CustomerFormInput, CustomerId, DashboardTotals,
    FormKind, FormPayload, ListRecord, ListState, MonthlyRevenue, Order, OrderFormInput, OrderId,
    OrderStatus, Overlay, PageView, Product, ProductFormInput, ProductId, ProductStatus,
    SettingKey, SettingValue, SettingValueKind, StoreSetting, TabKind, format_cents,
    format_compact_cents, format_date, format_order_items, parse_order_items,
    parse_required_cents, parse_required_date, parse_required_int,
};
use shopdesk_app::{ActivityEntry, DATE_LAYOUT};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const STATUS_CLEAR_SECS: u64 = 4;
const RECENT_ORDER_LIMIT: usize = 3;
const TREND_MONTHS: usize = 6;
const TREND_BAR_WIDTH: usize = 24;

/// One screen's worth of records, loaded through the runtime on demand.
#[derive(Debug, Clone, PartialEq)]
pub enum TabSnapshot {
    Orders(Vec<Order>),
    Products(Vec<Product>),
    Customers(Vec<Customer>),
    Settings(Vec<StoreSetting>),
}

impl TabSnapshot {
    pub const fn tab_kind(&self) -> TabKind {
        match self {
            Self::Orders(_) => TabKind::Orders,
            Self::Products(_) => TabKind::Products,
            Self::Customers(_) => TabKind::Customers,
            Self::Settings(_) => TabKind::Settings,
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            Self::Orders(rows) => rows.len(),
            Self::Products(rows) => rows.len(),
            Self::Customers(rows) => rows.len(),
            Self::Settings(rows) => rows.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSnapshot {
    pub totals: DashboardTotals,
    pub monthly: Vec<MonthlyRevenue>,
    pub recent_orders: Vec<Order>,
    pub activity: Vec<ActivityEntry>,
}

/// What a committed form did on the other side of the runtime boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Created(String),
    Updated(String),
    /// The target identifier matched nothing; the store was left unchanged.
    NoMatch(String),
}

pub trait AppRuntime {
    fn load_dashboard(&mut self) -> Result<DashboardSnapshot>;
    fn load_tab_snapshot(&mut self, tab: TabKind) -> Result<Option<TabSnapshot>>;
    fn submit_form(&mut self, payload: &FormPayload) -> Result<CommitOutcome>;
    fn update_setting(&mut self, key: SettingKey, value: &SettingValue) -> Result<()>;
    fn store_label(&mut self) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormChoiceKind {
    None,
    OrderStatus,
    ProductStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FormFieldSpec {
    label: &'static str,
    choices: FormChoiceKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormUiState {
    kind: FormKind,
    target_id: Option<String>,
    field_index: usize,
    values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct ViewData {
    store_label: String,
    dashboard: DashboardSnapshot,
    orders: ListState<Order>,
    products: ListState<Product>,
    customers: ListState<Customer>,
    orders_snapshot: Vec<Order>,
    products_snapshot: Vec<Product>,
    customers_snapshot: Vec<Customer>,
    settings: Vec<StoreSetting>,
    selected_row: usize,
    settings_cursor: usize,
    setting_input: Option<String>,
    form: Option<FormUiState>,
    status_token: u64,
}

impl ViewData {
    fn new(page_size: usize) -> Self {
        Self {
            store_label: String::new(),
            dashboard: DashboardSnapshot::default(),
            orders: ListState::new(page_size),
            products: ListState::new(page_size),
            customers: ListState::new(page_size),
            orders_snapshot: Vec::new(),
            products_snapshot: Vec::new(),
            customers_snapshot: Vec::new(),
            settings: Vec::new(),
            selected_row: 0,
            settings_cursor: 0,
            setting_input: None,
            form: None,
            status_token: 0,
        }
    }
}

pub fn run_app<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    page_size: usize,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::new(page_size);
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = refresh_view_data(runtime, &mut view_data, state.active_tab) {
        state.dispatch(AppCommand::SetStatus(format!("load failed: {error:#}")));
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(state: &mut AppState, view_data: &ViewData, rx: &Receiver<InternalEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(STATUS_CLEAR_SECS));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    view_data.status_token = view_data.status_token.wrapping_add(1);
    state.dispatch(AppCommand::SetStatus(message.into()));
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn refresh_view_data<R: AppRuntime>(
    runtime: &mut R,
    view_data: &mut ViewData,
    active_tab: TabKind,
) -> Result<()> {
    view_data.store_label = runtime.store_label()?;
    view_data.dashboard = runtime.load_dashboard()?;

    for tab in [TabKind::Orders, TabKind::Products, TabKind::Customers, TabKind::Settings] {
        let Some(snapshot) = runtime.load_tab_snapshot(tab)? else {
            continue;
        };
        match snapshot {
            TabSnapshot::Orders(rows) => view_data.orders_snapshot = rows,
            TabSnapshot::Products(rows) => view_data.products_snapshot = rows,
            TabSnapshot::Customers(rows) => view_data.customers_snapshot = rows,
            TabSnapshot::Settings(rows) => view_data.settings = rows,
        }
    }

    view_data.orders.reclamp(&view_data.orders_snapshot);
    view_data.products.reclamp(&view_data.products_snapshot);
    view_data.customers.reclamp(&view_data.customers_snapshot);
    if view_data.settings_cursor >= view_data.settings.len() {
        view_data.settings_cursor = view_data.settings.len().saturating_sub(1);
    }
    clamp_selected_row(view_data, active_tab);
    Ok(())
}

fn visible_len(view_data: &ViewData, tab: TabKind) -> usize {
    match tab {
        TabKind::Orders => view_data.orders.page_view(&view_data.orders_snapshot).visible.len(),
        TabKind::Products => {
            view_data
                .products
                .page_view(&view_data.products_snapshot)
                .visible
                .len()
        }
        TabKind::Customers => {
            view_data
                .customers
                .page_view(&view_data.customers_snapshot)
                .visible
                .len()
        }
        TabKind::Dashboard | TabKind::Settings => 0,
    }
}

fn clamp_selected_row(view_data: &mut ViewData, tab: TabKind) {
    let len = visible_len(view_data, tab);
    if len == 0 {
        view_data.selected_row = 0;
    } else if view_data.selected_row >= len {
        view_data.selected_row = len - 1;
    }
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match state.mode {
        AppMode::Nav => handle_nav_key(state, runtime, view_data, internal_tx, key),
        AppMode::Search => {
            handle_search_key(state, view_data, key);
            false
        }
        AppMode::Detail => {
            handle_detail_key(state, view_data, key);
            false
        }
        AppMode::Form(_) => {
            handle_form_key(state, runtime, view_data, internal_tx, key);
            false
        }
    }
}

fn handle_nav_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if state.active_tab == TabKind::Settings && view_data.setting_input.is_some() {
        handle_setting_input_key(state, runtime, view_data, internal_tx, key);
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Tab => {
            state.dispatch(AppCommand::NextTab);
            view_data.selected_row = 0;
        }
        KeyCode::BackTab => {
            state.dispatch(AppCommand::PrevTab);
            view_data.selected_row = 0;
        }
        KeyCode::Char(digit @ '1'..='5') => {
            let index = digit as usize - '1' as usize;
            state.dispatch(AppCommand::SelectTab(TabKind::ALL[index]));
            view_data.selected_row = 0;
        }
        KeyCode::Char('r') => {
            match refresh_view_data(runtime, view_data, state.active_tab) {
                Ok(()) => emit_status(state, view_data, internal_tx, "reloaded"),
                Err(error) => emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("reload failed: {error:#}"),
                ),
            }
        }
        KeyCode::Char('/') if is_list_tab(state.active_tab) => {
            state.dispatch(AppCommand::EnterSearch);
        }
        _ => {
            if state.active_tab == TabKind::Settings {
                handle_settings_nav_key(state, runtime, view_data, internal_tx, key);
            } else if is_list_tab(state.active_tab) {
                handle_list_nav_key(state, view_data, internal_tx, key);
            }
        }
    }
    false
}

const fn is_list_tab(tab: TabKind) -> bool {
    matches!(tab, TabKind::Orders | TabKind::Products | TabKind::Customers)
}

fn handle_list_nav_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let tab = state.active_tab;
    match key.code {
        KeyCode::Down => {
            let len = visible_len(view_data, tab);
            if len > 0 && view_data.selected_row + 1 < len {
                view_data.selected_row += 1;
            }
        }
        KeyCode::Up => {
            view_data.selected_row = view_data.selected_row.saturating_sub(1);
        }
        KeyCode::Right | KeyCode::Char('n') => {
            move_page(view_data, tab, 1);
        }
        KeyCode::Left | KeyCode::Char('p') => {
            move_page(view_data, tab, -1);
        }
        KeyCode::Esc => {
            clear_query(view_data, tab);
            view_data.selected_row = 0;
        }
        KeyCode::Char('v') | KeyCode::Enter => {
            open_selected_view(state, view_data, tab);
        }
        KeyCode::Char('e') => {
            if !open_selected_editor(state, view_data, tab) {
                emit_status(state, view_data, internal_tx, "no row selected");
            }
        }
        KeyCode::Char('a') => {
            open_blank_editor(state, view_data, tab);
        }
        _ => {}
    }
}

fn move_page(view_data: &mut ViewData, tab: TabKind, delta: isize) {
    match tab {
        TabKind::Orders => {
            let requested = saturating_page(view_data.orders.page(), delta);
            view_data.orders.set_page(&view_data.orders_snapshot, requested);
        }
        TabKind::Products => {
            let requested = saturating_page(view_data.products.page(), delta);
            view_data
                .products
                .set_page(&view_data.products_snapshot, requested);
        }
        TabKind::Customers => {
            let requested = saturating_page(view_data.customers.page(), delta);
            view_data
                .customers
                .set_page(&view_data.customers_snapshot, requested);
        }
        TabKind::Dashboard | TabKind::Settings => {}
    }
    view_data.selected_row = 0;
}

fn saturating_page(page: usize, delta: isize) -> usize {
    let next = page as isize + delta;
    next.max(1) as usize
}

fn clear_query(view_data: &mut ViewData, tab: TabKind) {
    match tab {
        TabKind::Orders => view_data.orders.set_query(&view_data.orders_snapshot, ""),
        TabKind::Products => view_data.products.set_query(&view_data.products_snapshot, ""),
        TabKind::Customers => {
            view_data
                .customers
                .set_query(&view_data.customers_snapshot, "")
        }
        TabKind::Dashboard | TabKind::Settings => {}
    }
}

fn selected_order(view_data: &ViewData) -> Option<Order> {
    let view = view_data.orders.page_view(&view_data.orders_snapshot);
    view.visible.get(view_data.selected_row).cloned()
}

fn selected_product(view_data: &ViewData) -> Option<Product> {
    let view = view_data.products.page_view(&view_data.products_snapshot);
    view.visible.get(view_data.selected_row).cloned()
}

fn selected_customer(view_data: &ViewData) -> Option<Customer> {
    let view = view_data.customers.page_view(&view_data.customers_snapshot);
    view.visible.get(view_data.selected_row).cloned()
}

fn open_selected_view(state: &mut AppState, view_data: &mut ViewData, tab: TabKind) {
    let opened = match tab {
        TabKind::Orders => match selected_order(view_data) {
            Some(order) => {
                view_data.orders.open_view(order);
                true
            }
            None => false,
        },
        TabKind::Products => match selected_product(view_data) {
            Some(product) => {
                view_data.products.open_view(product);
                true
            }
            None => false,
        },
        TabKind::Customers => match selected_customer(view_data) {
            Some(customer) => {
                view_data.customers.open_view(customer);
                true
            }
            None => false,
        },
        TabKind::Dashboard | TabKind::Settings => false,
    };
    if opened {
        state.dispatch(AppCommand::OpenDetail);
    }
}

fn open_selected_editor(state: &mut AppState, view_data: &mut ViewData, tab: TabKind) -> bool {
    match tab {
        TabKind::Orders => {
            let Some(order) = selected_order(view_data) else {
                return false;
            };
            view_data.orders.open_edit(Some(&order));
            view_data.form = Some(order_form_state(
                Some(order.id.as_str().to_owned()),
                &order.draft(),
            ));
            state.dispatch(AppCommand::OpenForm(FormKind::Order));
            true
        }
        TabKind::Products => {
            let Some(product) = selected_product(view_data) else {
                return false;
            };
            view_data.products.open_edit(Some(&product));
            view_data.form = Some(product_form_state(
                Some(product.id.as_str().to_owned()),
                &product.draft(),
            ));
            state.dispatch(AppCommand::OpenForm(FormKind::Product));
            true
        }
        TabKind::Customers => {
            let Some(customer) = selected_customer(view_data) else {
                return false;
            };
            view_data.customers.open_edit(Some(&customer));
            view_data.form = Some(customer_form_state(
                Some(customer.id.as_str().to_owned()),
                &customer.draft(),
            ));
            state.dispatch(AppCommand::OpenForm(FormKind::Customer));
            true
        }
        TabKind::Dashboard | TabKind::Settings => false,
    }
}

fn open_blank_editor(state: &mut AppState, view_data: &mut ViewData, tab: TabKind) {
    match tab {
        TabKind::Orders => {
            view_data.orders.open_edit(None);
            view_data.form = Some(order_form_state(None, &Order::blank_draft()));
            state.dispatch(AppCommand::OpenForm(FormKind::Order));
        }
        TabKind::Products => {
            view_data.products.open_edit(None);
            view_data.form = Some(product_form_state(None, &Product::blank_draft()));
            state.dispatch(AppCommand::OpenForm(FormKind::Product));
        }
        TabKind::Customers => {
            view_data.customers.open_edit(None);
            view_data.form = Some(customer_form_state(None, &Customer::blank_draft()));
            state.dispatch(AppCommand::OpenForm(FormKind::Customer));
        }
        TabKind::Dashboard | TabKind::Settings => {}
    }
}

fn handle_search_key(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) {
    let tab = state.active_tab;
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.dispatch(AppCommand::ExitToNav);
        }
        KeyCode::Backspace => {
            let mut query = active_query(view_data, tab);
            query.pop();
            apply_query(view_data, tab, &query);
        }
        KeyCode::Char(ch) => {
            let mut query = active_query(view_data, tab);
            query.push(ch);
            apply_query(view_data, tab, &query);
        }
        _ => {}
    }
}

fn active_query(view_data: &ViewData, tab: TabKind) -> String {
    match tab {
        TabKind::Orders => view_data.orders.query().to_owned(),
        TabKind::Products => view_data.products.query().to_owned(),
        TabKind::Customers => view_data.customers.query().to_owned(),
        TabKind::Dashboard | TabKind::Settings => String::new(),
    }
}

fn apply_query(view_data: &mut ViewData, tab: TabKind, query: &str) {
    match tab {
        TabKind::Orders => view_data.orders.set_query(&view_data.orders_snapshot, query),
        TabKind::Products => {
            view_data
                .products
                .set_query(&view_data.products_snapshot, query)
        }
        TabKind::Customers => {
            view_data
                .customers
                .set_query(&view_data.customers_snapshot, query)
        }
        TabKind::Dashboard | TabKind::Settings => {}
    }
    view_data.selected_row = 0;
}

fn handle_detail_key(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            match state.active_tab {
                TabKind::Orders => view_data.orders.close(),
                TabKind::Products => view_data.products.close(),
                TabKind::Customers => view_data.customers.close(),
                TabKind::Dashboard | TabKind::Settings => {}
            }
            state.dispatch(AppCommand::ExitToNav);
        }
        _ => {}
    }
}

fn handle_settings_nav_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Down => {
            if view_data.settings_cursor + 1 < view_data.settings.len() {
                view_data.settings_cursor += 1;
            }
        }
        KeyCode::Up => {
            view_data.settings_cursor = view_data.settings_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            let Some(setting) = view_data.settings.get(view_data.settings_cursor).cloned() else {
                return;
            };
            match setting.key.expected_value_kind() {
                SettingValueKind::Bool => {
                    let SettingValue::Bool(current) = setting.value else {
                        emit_status(
                            state,
                            view_data,
                            internal_tx,
                            "settings value invalid; expected on/off",
                        );
                        return;
                    };
                    save_setting(
                        state,
                        runtime,
                        view_data,
                        internal_tx,
                        setting.key,
                        SettingValue::Bool(!current),
                    );
                }
                SettingValueKind::Text => {
                    view_data.setting_input = Some(setting.value.display());
                }
            }
        }
        _ => {}
    }
}

fn handle_setting_input_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            view_data.setting_input = None;
        }
        KeyCode::Enter => {
            let Some(setting) = view_data.settings.get(view_data.settings_cursor).cloned() else {
                view_data.setting_input = None;
                return;
            };
            let Some(buffer) = view_data.setting_input.take() else {
                return;
            };
            let Some(value) = SettingValue::parse_for_key(setting.key, &buffer) else {
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("invalid value for {}", setting.key.label()),
                );
                return;
            };
            save_setting(state, runtime, view_data, internal_tx, setting.key, value);
        }
        KeyCode::Backspace => {
            if let Some(buffer) = view_data.setting_input.as_mut() {
                buffer.pop();
            }
        }
        KeyCode::Char(ch) => {
            if let Some(buffer) = view_data.setting_input.as_mut() {
                buffer.push(ch);
            }
        }
        _ => {}
    }
}

fn save_setting<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: SettingKey,
    value: SettingValue,
) {
    if let Err(error) = runtime.update_setting(key, &value) {
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("save setting failed: {error:#}"),
        );
        return;
    }
    if let Err(error) = refresh_view_data(runtime, view_data, state.active_tab) {
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("reload failed: {error:#}"),
        );
        return;
    }
    emit_status(
        state,
        view_data,
        internal_tx,
        format!("{} set to {}", key.label(), value.display()),
    );
}

// Forms

fn form_field_specs(kind: FormKind) -> &'static [FormFieldSpec] {
    match kind {
        FormKind::Order => &[
            FormFieldSpec {
                label: "customer name",
                choices: FormChoiceKind::None,
            },
            FormFieldSpec {
                label: "customer email",
                choices: FormChoiceKind::None,
            },
            FormFieldSpec {
                label: "placed on",
                choices: FormChoiceKind::None,
            },
            FormFieldSpec {
                label: "status",
                choices: FormChoiceKind::OrderStatus,
            },
            FormFieldSpec {
                label: "total",
                choices: FormChoiceKind::None,
            },
            FormFieldSpec {
                label: "items",
                choices: FormChoiceKind::None,
            },
            FormFieldSpec {
                label: "shipping address",
                choices: FormChoiceKind::None,
            },
        ],
        FormKind::Product => &[
            FormFieldSpec {
                label: "name",
                choices: FormChoiceKind::None,
            },
            FormFieldSpec {
                label: "description",
                choices: FormChoiceKind::None,
            },
            FormFieldSpec {
                label: "category",
                choices: FormChoiceKind::None,
            },
            FormFieldSpec {
                label: "price",
                choices: FormChoiceKind::None,
            },
            FormFieldSpec {
                label: "stock",
                choices: FormChoiceKind::None,
            },
            FormFieldSpec {
                label: "status",
                choices: FormChoiceKind::ProductStatus,
            },
            FormFieldSpec {
                label: "image url",
                choices: FormChoiceKind::None,
            },
        ],
        FormKind::Customer => &[
            FormFieldSpec {
                label: "name",
                choices: FormChoiceKind::None,
            },
            FormFieldSpec {
                label: "email",
                choices: FormChoiceKind::None,
            },
            FormFieldSpec {
                label: "phone",
                choices: FormChoiceKind::None,
            },
            FormFieldSpec {
                label: "address",
                choices: FormChoiceKind::None,
            },
            FormFieldSpec {
                label: "avatar url",
                choices: FormChoiceKind::None,
            },
        ],
    }
}

fn order_form_state(target_id: Option<String>, draft: &OrderFormInput) -> FormUiState {
    FormUiState {
        kind: FormKind::Order,
        target_id,
        field_index: 0,
        values: vec![
            draft.customer_name.clone(),
            draft.customer_email.clone(),
            format_date(Some(draft.placed_on)),
            draft.status.label().to_owned(),
            format_cents(draft.total_cents),
            format_order_items(&draft.items),
            draft.shipping_address.clone(),
        ],
    }
}

fn product_form_state(target_id: Option<String>, draft: &ProductFormInput) -> FormUiState {
    FormUiState {
        kind: FormKind::Product,
        target_id,
        field_index: 0,
        values: vec![
            draft.name.clone(),
            draft.description.clone(),
            draft.category.clone(),
            format_cents(draft.price_cents),
            draft.stock.to_string(),
            draft.status.label().to_owned(),
            draft.image_url.clone(),
        ],
    }
}

fn customer_form_state(target_id: Option<String>, draft: &CustomerFormInput) -> FormUiState {
    FormUiState {
        kind: FormKind::Customer,
        target_id,
        field_index: 0,
        values: vec![
            draft.name.clone(),
            draft.email.clone(),
            draft.phone.clone(),
            draft.address.clone(),
            draft.avatar_url.clone(),
        ],
    }
}

fn build_payload(form: &FormUiState) -> Result<FormPayload> {
    match form.kind {
        FormKind::Order => {
            let values = &form.values;
            let placed_on = parse_required_date(&values[2])
                .map_err(|error| anyhow!("placed on: {error}; use {DATE_LAYOUT}"))?;
            let status = OrderStatus::parse(&values[3].trim().to_lowercase())
                .ok_or_else(|| anyhow!("unknown order status {:?}", values[3]))?;
            let total_cents = parse_required_cents(&values[4])
                .map_err(|error| anyhow!("total: {error}"))?;
            let items =
                parse_order_items(&values[5]).map_err(|error| anyhow!("items: {error}"))?;
            Ok(FormPayload::Order {
                id: form.target_id.clone().map(OrderId::new),
                input: OrderFormInput {
                    customer_name: values[0].trim().to_owned(),
                    customer_email: values[1].trim().to_owned(),
                    placed_on,
                    status,
                    total_cents,
                    items,
                    shipping_address: values[6].trim().to_owned(),
                },
            })
        }
        FormKind::Product => {
            let values = &form.values;
            let price_cents = parse_required_cents(&values[3])
                .map_err(|error| anyhow!("price: {error}"))?;
            let stock =
                parse_required_int(&values[4]).map_err(|error| anyhow!("stock: {error}"))?;
            let status = ProductStatus::parse(&values[5].trim().to_lowercase())
                .ok_or_else(|| anyhow!("unknown product status {:?}", values[5]))?;
            Ok(FormPayload::Product {
                id: form.target_id.clone().map(ProductId::new),
                input: ProductFormInput {
                    name: values[0].trim().to_owned(),
                    description: values[1].trim().to_owned(),
                    category: values[2].trim().to_owned(),
                    price_cents,
                    stock,
                    status,
                    image_url: values[6].trim().to_owned(),
                },
            })
        }
        FormKind::Customer => {
            let values = &form.values;
            Ok(FormPayload::Customer {
                id: form.target_id.clone().map(CustomerId::new),
                input: CustomerFormInput {
                    name: values[0].trim().to_owned(),
                    email: values[1].trim().to_owned(),
                    phone: values[2].trim().to_owned(),
                    address: values[3].trim().to_owned(),
                    avatar_url: values[4].trim().to_owned(),
                },
            })
        }
    }
}

fn cycle_choice(value: &str, choices: FormChoiceKind) -> Option<String> {
    match choices {
        FormChoiceKind::None => None,
        FormChoiceKind::OrderStatus => {
            let current = OrderStatus::parse(&value.trim().to_lowercase());
            let next = match current {
                Some(status) => {
                    let index = OrderStatus::ALL
                        .iter()
                        .position(|entry| *entry == status)
                        .unwrap_or(0);
                    OrderStatus::ALL[(index + 1) % OrderStatus::ALL.len()]
                }
                None => OrderStatus::ALL[0],
            };
            Some(next.label().to_owned())
        }
        FormChoiceKind::ProductStatus => {
            let current = ProductStatus::parse(&value.trim().to_lowercase());
            let next = match current {
                Some(status) => {
                    let index = ProductStatus::ALL
                        .iter()
                        .position(|entry| *entry == status)
                        .unwrap_or(0);
                    ProductStatus::ALL[(index + 1) % ProductStatus::ALL.len()]
                }
                None => ProductStatus::ALL[0],
            };
            Some(next.label().to_owned())
        }
    }
}

fn handle_form_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Some(form) = view_data.form.as_mut() else {
        state.dispatch(AppCommand::ExitToNav);
        return;
    };
    let specs = form_field_specs(form.kind);
    let field = form.field_index.min(specs.len().saturating_sub(1));
    let spec = specs[field];

    match key.code {
        KeyCode::Esc => {
            cancel_active_form(state, view_data);
        }
        KeyCode::Enter => {
            submit_active_form(state, runtime, view_data, internal_tx);
        }
        KeyCode::Down | KeyCode::Tab => {
            form.field_index = (field + 1) % specs.len();
        }
        KeyCode::Up | KeyCode::BackTab => {
            form.field_index = (field + specs.len() - 1) % specs.len();
        }
        KeyCode::Backspace => {
            if spec.choices == FormChoiceKind::None {
                form.values[field].pop();
            }
        }
        KeyCode::Char(' ') => {
            if let Some(next) = cycle_choice(&form.values[field], spec.choices) {
                form.values[field] = next;
            } else {
                form.values[field].push(' ');
            }
        }
        KeyCode::Char(ch) => {
            if spec.choices == FormChoiceKind::None {
                form.values[field].push(ch);
            }
        }
        _ => {}
    }
}

fn cancel_active_form(state: &mut AppState, view_data: &mut ViewData) {
    match state.active_tab {
        TabKind::Orders => view_data.orders.close(),
        TabKind::Products => view_data.products.close(),
        TabKind::Customers => view_data.customers.close(),
        TabKind::Dashboard | TabKind::Settings => {}
    }
    view_data.form = None;
    state.dispatch(AppCommand::ExitToNav);
}

fn submit_active_form<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(form) = view_data.form.clone() else {
        return;
    };
    let payload = match build_payload(&form) {
        Ok(payload) => payload,
        Err(error) => {
            emit_status(state, view_data, internal_tx, format!("form invalid: {error:#}"));
            return;
        }
    };
    if let Err(error) = payload.validate() {
        emit_status(state, view_data, internal_tx, format!("form invalid: {error:#}"));
        return;
    }

    let outcome = match runtime.submit_form(&payload) {
        Ok(outcome) => outcome,
        Err(error) => {
            emit_status(state, view_data, internal_tx, format!("save failed: {error:#}"));
            return;
        }
    };

    // The working copy leaves the overlay only now that the store accepted it.
    match &payload {
        FormPayload::Order { input, .. } => {
            view_data.orders.set_draft(input.clone());
            let _ = view_data.orders.commit_edit();
        }
        FormPayload::Product { input, .. } => {
            view_data.products.set_draft(input.clone());
            let _ = view_data.products.commit_edit();
        }
        FormPayload::Customer { input, .. } => {
            view_data.customers.set_draft(input.clone());
            let _ = view_data.customers.commit_edit();
        }
    }
    view_data.form = None;
    state.dispatch(AppCommand::ExitToNav);

    if let Err(error) = refresh_view_data(runtime, view_data, state.active_tab) {
        emit_status(state, view_data, internal_tx, format!("reload failed: {error:#}"));
        return;
    }

    let kind = payload.kind().label();
    let message = match outcome {
        CommitOutcome::Created(id) => format!("{kind} {id} created"),
        CommitOutcome::Updated(id) => format!("{kind} {id} saved"),
        CommitOutcome::NoMatch(id) => format!("no matching {kind} {id}; nothing saved"),
    };
    emit_status(state, view_data, internal_tx, message);
}

// Rendering

fn render(frame: &mut ratatui::Frame, state: &AppState, view_data: &ViewData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tab_bar(frame, state, view_data, chunks[0]);

    match state.active_tab {
        TabKind::Dashboard => render_dashboard(frame, view_data, chunks[1]),
        TabKind::Orders => render_orders(frame, state, view_data, chunks[1]),
        TabKind::Products => render_products(frame, state, view_data, chunks[1]),
        TabKind::Customers => render_customers(frame, state, view_data, chunks[1]),
        TabKind::Settings => render_settings(frame, view_data, chunks[1]),
    }

    render_status_line(frame, state, view_data, chunks[2]);

    match state.mode {
        AppMode::Detail => render_detail_overlay(frame, state, view_data),
        AppMode::Form(_) => render_form_overlay(frame, view_data),
        AppMode::Nav | AppMode::Search => {}
    }
}

fn render_tab_bar(frame: &mut ratatui::Frame, state: &AppState, view_data: &ViewData, area: Rect) {
    let selected = TabKind::ALL
        .iter()
        .position(|tab| *tab == state.active_tab)
        .unwrap_or(0);
    let titles: Vec<&str> = TabKind::ALL.iter().map(|tab| tab.label()).collect();
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" shopdesk · {} ", view_data.store_label)),
        );
    frame.render_widget(tabs, area);
}

fn status_text(state: &AppState) -> String {
    if let Some(status) = &state.status_line {
        return status.clone();
    }
    match state.mode {
        AppMode::Nav => {
            "tab/1-5 switch · / search · ↑↓ select · ←→ page · v view · e edit · a add · r reload · q quit"
                .to_owned()
        }
        AppMode::Search => "type to filter · enter/esc done".to_owned(),
        AppMode::Detail => "esc close".to_owned(),
        AppMode::Form(_) => {
            "↑↓ field · type to edit · space cycles choices · enter save · esc cancel".to_owned()
        }
    }
}

fn render_status_line(
    frame: &mut ratatui::Frame,
    state: &AppState,
    _view_data: &ViewData,
    area: Rect,
) {
    let style = if state.status_line.is_some() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(status_text(state)).style(style), area);
}

fn search_line(query: &str, searching: bool) -> Line<'static> {
    let label = Span::styled("search: ", Style::default().fg(Color::DarkGray));
    let text = if searching {
        Span::styled(
            format!("{query}▏"),
            Style::default().fg(Color::Yellow),
        )
    } else if query.is_empty() {
        Span::styled("(none)".to_owned(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(query.to_owned())
    };
    Line::from(vec![label, text])
}

fn pagination_line<R>(view: &PageView<R>, page_size: usize, noun: &str) -> String {
    if view.total_count == 0 {
        return format!("page 1/1 · no {noun}");
    }
    let first = (view.page - 1) * page_size + 1;
    let last = first + view.visible.len() - 1;
    format!(
        "page {}/{} · showing {first}-{last} of {} {noun}",
        view.page, view.total_pages, view.total_count
    )
}

fn render_orders(frame: &mut ratatui::Frame, state: &AppState, view_data: &ViewData, area: Rect) {
    let view = view_data.orders.page_view(&view_data.orders_snapshot);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(search_line(
            view_data.orders.query(),
            state.mode == AppMode::Search,
        )),
        chunks[0],
    );

    if view.visible.is_empty() {
        frame.render_widget(
            Paragraph::new("No orders found.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title(" Orders ")),
            chunks[1],
        );
    } else {
        let header = Row::new(vec!["Order", "Customer", "Date", "Status", "Total"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = view
            .visible
            .iter()
            .enumerate()
            .map(|(index, order)| {
                let style = if index == view_data.selected_row {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(order.id.as_str().to_owned()),
                    Cell::from(format!("{} <{}>", order.customer_name, order.customer_email)),
                    Cell::from(format_date(Some(order.placed_on))),
                    Cell::from(order.status.label()),
                    Cell::from(format_cents(order.total_cents)),
                ])
                .style(style)
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Min(24),
                Constraint::Length(11),
                Constraint::Length(11),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Orders ({}) ", view.total_count)),
        );
        frame.render_widget(table, chunks[1]);
    }

    frame.render_widget(
        Paragraph::new(pagination_line(
            &view,
            view_data.orders.page_size(),
            "orders",
        ))
        .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn render_products(frame: &mut ratatui::Frame, state: &AppState, view_data: &ViewData, area: Rect) {
    let view = view_data.products.page_view(&view_data.products_snapshot);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(search_line(
            view_data.products.query(),
            state.mode == AppMode::Search,
        )),
        chunks[0],
    );

    if view.visible.is_empty() {
        frame.render_widget(
            Paragraph::new("No products found.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title(" Products ")),
            chunks[1],
        );
    } else {
        let header = Row::new(vec!["Product", "Name", "Category", "Price", "Stock", "Status"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = view
            .visible
            .iter()
            .enumerate()
            .map(|(index, product)| {
                let style = if index == view_data.selected_row {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(product.id.as_str().to_owned()),
                    Cell::from(product.name.clone()),
                    Cell::from(product.category.clone()),
                    Cell::from(format_cents(product.price_cents)),
                    Cell::from(product.stock.to_string()),
                    Cell::from(product.status.label()),
                ])
                .style(style)
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(9),
                Constraint::Min(24),
                Constraint::Length(14),
                Constraint::Length(11),
                Constraint::Length(7),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Products ({}) ", view.total_count)),
        );
        frame.render_widget(table, chunks[1]);
    }

    frame.render_widget(
        Paragraph::new(pagination_line(
            &view,
            view_data.products.page_size(),
            "products",
        ))
        .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn render_customers(frame: &mut ratatui::Frame, state: &AppState, view_data: &ViewData, area: Rect) {
    let view = view_data.customers.page_view(&view_data.customers_snapshot);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(search_line(
            view_data.customers.query(),
            state.mode == AppMode::Search,
        )),
        chunks[0],
    );

    if view.visible.is_empty() {
        frame.render_widget(
            Paragraph::new("No customers found.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title(" Customers ")),
            chunks[1],
        );
    } else {
        let header = Row::new(vec!["Customer", "Name", "Email", "Joined", "Orders", "Spent"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = view
            .visible
            .iter()
            .enumerate()
            .map(|(index, customer)| {
                let style = if index == view_data.selected_row {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(customer.id.as_str().to_owned()),
                    Cell::from(customer.name.clone()),
                    Cell::from(customer.email.clone()),
                    Cell::from(format_date(Some(customer.joined_on))),
                    Cell::from(customer.total_orders.to_string()),
                    Cell::from(format_cents(customer.total_spent_cents)),
                ])
                .style(style)
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(9),
                Constraint::Min(18),
                Constraint::Min(20),
                Constraint::Length(11),
                Constraint::Length(7),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Customers ({}) ", view.total_count)),
        );
        frame.render_widget(table, chunks[1]);
    }

    frame.render_widget(
        Paragraph::new(pagination_line(
            &view,
            view_data.customers.page_size(),
            "customers",
        ))
        .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn render_dashboard(frame: &mut ratatui::Frame, view_data: &ViewData, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    let totals = &view_data.dashboard.totals;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(rows[0]);
    render_kpi_card(
        frame,
        cards[0],
        "Total Revenue",
        format_compact_cents(totals.revenue_cents),
    );
    render_kpi_card(frame, cards[1], "Orders", totals.orders.to_string());
    render_kpi_card(frame, cards[2], "Customers", totals.customers.to_string());
    render_kpi_card(
        frame,
        cards[3],
        "Published Products",
        totals.published_products.to_string(),
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(3, 5), Constraint::Ratio(2, 5)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((TREND_MONTHS + 2) as u16),
            Constraint::Min(4),
        ])
        .split(columns[0]);

    frame.render_widget(
        Paragraph::new(trend_lines(&view_data.dashboard.monthly)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Revenue Trend "),
        ),
        left[0],
    );

    let recent: Vec<Line> = view_data
        .dashboard
        .recent_orders
        .iter()
        .take(RECENT_ORDER_LIMIT)
        .map(|order| {
            Line::from(format!(
                "{}  {}  {}  {}",
                order.id.as_str(),
                order.customer_name,
                order.status.label(),
                format_cents(order.total_cents),
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(recent).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recent Orders "),
        ),
        left[1],
    );

    let activity: Vec<Line> = view_data
        .dashboard
        .activity
        .iter()
        .map(|entry| Line::from(format!("• {}", entry.description)))
        .collect();
    frame.render_widget(
        Paragraph::new(activity)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Recent Activity "),
            ),
        columns[1],
    );
}

fn render_kpi_card(frame: &mut ratatui::Frame, area: Rect, title: &str, value: String) {
    let lines = vec![Line::from(Span::styled(
        value,
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        ),
        area,
    );
}

fn trend_lines(monthly: &[MonthlyRevenue]) -> Vec<Line<'static>> {
    let max = monthly
        .iter()
        .map(|bucket| bucket.revenue_cents)
        .max()
        .unwrap_or(0);
    monthly
        .iter()
        .map(|bucket| {
            Line::from(format!(
                "{:<4}{} {}",
                bucket.label,
                revenue_bar(bucket.revenue_cents, max, TREND_BAR_WIDTH),
                format_compact_cents(bucket.revenue_cents),
            ))
        })
        .collect()
}

fn revenue_bar(value: i64, max: i64, width: usize) -> String {
    if max <= 0 || value <= 0 {
        return String::new();
    }
    let filled = ((value as f64 / max as f64) * width as f64).round() as usize;
    "▇".repeat(filled.clamp(1, width))
}

fn render_settings(frame: &mut ratatui::Frame, view_data: &ViewData, area: Rect) {
    let lines: Vec<Line> = view_data
        .settings
        .iter()
        .enumerate()
        .map(|(index, setting)| {
            let selected = index == view_data.settings_cursor;
            let value = if selected && view_data.setting_input.is_some() {
                format!(
                    "{}▏",
                    view_data.setting_input.clone().unwrap_or_default()
                )
            } else {
                setting.value.display()
            };
            let text = format!("{:<24}{value}", setting.key.label());
            if selected {
                Line::from(Span::styled(
                    text,
                    Style::default().add_modifier(Modifier::REVERSED),
                ))
            } else {
                Line::from(text)
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Settings · enter edits/toggles "),
        ),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn detail_lines(state: &AppState, view_data: &ViewData) -> Option<(String, Vec<Line<'static>>)> {
    match state.active_tab {
        TabKind::Orders => {
            let Some(Overlay::View(order)) = view_data.orders.overlay() else {
                return None;
            };
            let mut lines = vec![
                Line::from(format!(
                    "Customer: {} <{}>",
                    order.customer_name, order.customer_email
                )),
                Line::from(format!("Date: {}", format_date(Some(order.placed_on)))),
                Line::from(format!("Status: {}", order.status.label())),
                Line::from(format!("Total: {}", format_cents(order.total_cents))),
                Line::from(format!("Ship to: {}", order.shipping_address)),
                Line::from(""),
                Line::from("Items:"),
            ];
            for item in &order.items {
                lines.push(Line::from(format!("  - {} (qty {})", item.name, item.quantity)));
            }
            Some((format!("Order {}", order.id.as_str()), lines))
        }
        TabKind::Products => {
            let Some(Overlay::View(product)) = view_data.products.overlay() else {
                return None;
            };
            let lines = vec![
                Line::from(product.name.clone()),
                Line::from(format!("Category: {}", product.category)),
                Line::from(format!("Price: {}", format_cents(product.price_cents))),
                Line::from(format!("Stock: {}", product.stock)),
                Line::from(format!("Status: {}", product.status.label())),
                Line::from(format!("Image: {}", product.image_url)),
                Line::from(""),
                Line::from(product.description.clone()),
            ];
            Some((format!("Product {}", product.id.as_str()), lines))
        }
        TabKind::Customers => {
            let Some(Overlay::View(customer)) = view_data.customers.overlay() else {
                return None;
            };
            let lines = vec![
                Line::from(customer.name.clone()),
                Line::from(format!("Email: {}", customer.email)),
                Line::from(format!("Phone: {}", customer.phone)),
                Line::from(format!("Address: {}", customer.address)),
                Line::from(format!(
                    "Customer since {}",
                    format_date(Some(customer.joined_on))
                )),
                Line::from(format!("Total orders: {}", customer.total_orders)),
                Line::from(format!(
                    "Total spent: {}",
                    format_cents(customer.total_spent_cents)
                )),
                Line::from(format!(
                    "Last order: {}",
                    if customer.last_order_on.is_some() {
                        format_date(customer.last_order_on)
                    } else {
                        "never".to_owned()
                    }
                )),
            ];
            Some((format!("Customer {}", customer.id.as_str()), lines))
        }
        TabKind::Dashboard | TabKind::Settings => None,
    }
}

fn render_detail_overlay(frame: &mut ratatui::Frame, state: &AppState, view_data: &ViewData) {
    let Some((title, lines)) = detail_lines(state, view_data) else {
        return;
    };
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(format!(" {title} "))),
        area,
    );
}

fn form_title(form: &FormUiState) -> String {
    match &form.target_id {
        Some(id) => format!("Edit {} {id}", form.kind.label()),
        None => format!("Add {}", form.kind.label()),
    }
}

fn render_form_overlay(frame: &mut ratatui::Frame, view_data: &ViewData) {
    let Some(form) = &view_data.form else {
        return;
    };
    let specs = form_field_specs(form.kind);
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::with_capacity(specs.len());
    for (index, spec) in specs.iter().enumerate() {
        let value = form.values.get(index).cloned().unwrap_or_default();
        let text = format!("{:<18}{value}", spec.label);
        if index == form.field_index {
            lines.push(Line::from(Span::styled(
                format!("{text}▏"),
                Style::default().add_modifier(Modifier::REVERSED),
            )));
        } else {
            lines.push(Line::from(text));
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", form_title(form))),
            ),
        area,
    );
}
