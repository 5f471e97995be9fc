use std::{
    io::Write,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tempfile::NamedTempFile;

use crate::{
    error::{AppError, Result},
    models::Product,
};

const SHEET_NAME: &str = "Products";
const HEADERS: [&str; 5] = ["Id", "Name", "Category", "Price", "Quantity"];

/// Writes a product list out as a spreadsheet. The export either fully
/// succeeds or fails as a whole.
#[async_trait]
pub trait ProductExporter: Send + Sync + 'static {
    async fn export(&self, products: &[Product]) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct XlsxExporter {
    path: PathBuf,
}

impl XlsxExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProductExporter for XlsxExporter {
    async fn export(&self, products: &[Product]) -> Result<()> {
        let path = self.path.clone();
        let products = products.to_vec();

        tokio::task::spawn_blocking(move || write_file(&path, &products))
            .await
            .map_err(|e| AppError::InternalError(format!("Export task failed: {}", e)))?
    }
}

fn write_file(path: &Path, products: &[Product]) -> Result<()> {
    let bytes = render_workbook(products).map_err(export_error)?;

    // Staged beside the target: the rename must stay on one filesystem.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staging =
        NamedTempFile::new_in(dir).map_err(|e| AppError::ExportError(e.to_string()))?;
    staging
        .write_all(&bytes)
        .map_err(|e| AppError::ExportError(e.to_string()))?;
    staging
        .persist(path)
        .map_err(|e| AppError::ExportError(e.error.to_string()))?;

    tracing::info!("Exported {} products to {}", products.len(), path.display());
    Ok(())
}

pub fn render_workbook(products: &[Product]) -> std::result::Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (index, product) in products.iter().enumerate() {
        let row = index as u32 + 1;
        worksheet.write_number(row, 0, product.id as f64)?;
        worksheet.write_string(row, 1, &product.name)?;
        worksheet.write_string(row, 2, product.category.as_deref().unwrap_or_default())?;
        worksheet.write_number(row, 3, product.price.to_f64().unwrap_or_default())?;
        worksheet.write_number(row, 4, product.quantity)?;
    }

    workbook.save_to_buffer()
}

fn export_error(err: XlsxError) -> AppError {
    AppError::ExportError(err.to_string())
}
