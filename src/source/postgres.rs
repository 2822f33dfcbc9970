use crate::Measure;
use crate::Record;
use tokio_postgres::Client;

/// Connect using the `DB_URL` environment variable.
pub async fn db() -> anyhow::Result<Client> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let ref url = std::env::var("DB_URL").map_err(|_| anyhow::anyhow!("DB_URL must be set"))?;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(connection);
    Ok(client)
}

/// Bond table in PostgreSQL with columns `d, angle1, tor1, angle2, tor2`.
/// NULL measurements become NaN and are dropped downstream.
pub struct Postgres<'a> {
    client: &'a Client,
    table: String,
}

impl<'a> Postgres<'a> {
    pub fn new(client: &'a Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    #[rustfmt::skip]
    pub async fn records(&self) -> anyhow::Result<Vec<Record>> {
        let ref table = self.table;
        if !table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.') {
            return Err(anyhow::anyhow!("invalid table name: {}", table));
        }
        let sql = format!(
            "SELECT d::FLOAT8, angle1::FLOAT8, tor1::FLOAT8, angle2::FLOAT8, tor2::FLOAT8 FROM {}",
            table
        );
        let column = |row: &tokio_postgres::Row, i: usize| -> anyhow::Result<Measure> {
            Ok(row.try_get::<_, Option<Measure>>(i)?.unwrap_or(Measure::NAN))
        };
        let records = self
            .client
            .query(sql.as_str(), &[])
            .await?
            .iter()
            .map(|row| {
                Ok(Record {
                    d:      column(row, 0)?,
                    angle1: column(row, 1)?,
                    tor1:   column(row, 2)?,
                    angle2: column(row, 3)?,
                    tor2:   column(row, 4)?,
                    weight: 1.,
                })
            })
            .collect::<anyhow::Result<Vec<Record>>>()?;
        log::info!("{:<32}{:<32}", "records loaded", records.len());
        Ok(records)
    }
}
