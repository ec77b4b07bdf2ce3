use anyhow::Result;
use serde::Serialize;
use storefront_api::types::{Blog, Category, Contact, PaginatedResult, Product, Quote, User};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Paging summary on stderr so piped stdout stays clean JSON/tables.
pub fn print_paging<T>(page: &PaginatedResult<T>, noun: &str) {
    eprintln!(
        "Page {}/{} ({} total {})",
        page.page, page.pages, page.total, noun
    );
}

fn render<R: Tabled>(rows: Vec<R>) {
    if rows.is_empty() {
        println!("No records.");
        return;
    }
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{table}");
}

fn date(value: &Option<chrono::DateTime<chrono::Utc>>) -> String {
    value
        .as_ref()
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

// -- Rows --

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Username")]
    user_name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub fn print_users_table(users: &[User]) {
    render(
        users
            .iter()
            .map(|u| UserRow {
                id: u.key(),
                user_name: u.user_name.clone(),
                email: opt(&u.email),
                role: opt(&u.role),
                status: opt(&u.status),
            })
            .collect(),
    );
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Stock")]
    stock: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub fn print_products_table(products: &[Product]) {
    render(
        products
            .iter()
            .map(|p| ProductRow {
                id: p.key(),
                name: p.name.clone(),
                price: opt(&p.price),
                stock: opt(&p.stock_status),
                status: opt(&p.status),
            })
            .collect(),
    );
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Products")]
    products: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub fn print_categories_table(categories: &[Category]) {
    render(
        categories
            .iter()
            .map(|c| CategoryRow {
                id: c.key(),
                name: c.name.clone(),
                slug: opt(&c.slug),
                products: c
                    .product_count
                    .or(c.count)
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                status: opt(&c.status),
            })
            .collect(),
    );
}

#[derive(Tabled)]
struct BlogRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Published")]
    published: String,
    #[tabled(rename = "Slug")]
    slug: String,
}

pub fn print_blogs_table(blogs: &[Blog]) {
    render(
        blogs
            .iter()
            .map(|b| BlogRow {
                id: b.key(),
                title: b.title.clone(),
                status: opt(&b.status),
                published: date(&b.published_at),
                slug: opt(&b.slug),
            })
            .collect(),
    );
}

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Products")]
    products: usize,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created: String,
}

pub fn print_quotes_table(quotes: &[Quote]) {
    render(
        quotes
            .iter()
            .map(|q| QuoteRow {
                id: q.key(),
                name: q.name.clone(),
                company: opt(&q.company_name),
                email: opt(&q.email_address),
                products: q.product_details.len(),
                status: opt(&q.status),
                created: date(&q.created_at),
            })
            .collect(),
    );
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Received")]
    received: String,
}

pub fn print_contacts_table(contacts: &[Contact]) {
    render(
        contacts
            .iter()
            .map(|c| ContactRow {
                id: c.key(),
                name: opt(&c.name),
                email: opt(&c.email),
                subject: opt(&c.subject),
                received: date(&c.created_at),
            })
            .collect(),
    );
}
