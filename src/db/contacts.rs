use rusqlite::{params, Row};
use tracing::{debug, warn};

use super::{Database, Result};
use crate::models::{BatchEntry, Contact};

const UPSERT_SQL: &str = r#"INSERT INTO contacts (first_name, last_name, phone)
    VALUES (?1, ?2, ?3)
    ON CONFLICT (first_name) DO UPDATE SET
        phone = excluded.phone,
        last_name = COALESCE(excluded.last_name, contacts.last_name)"#;

impl Database {
    // ==================== CONTACT UPSERT ====================

    /// Insert a contact, or update phone (and last name, when given) of the
    /// contact that already has this first name. One statement, no prior read.
    pub fn upsert_contact(
        &self,
        first_name: &str,
        last_name: Option<&str>,
        phone: &str,
    ) -> Result<()> {
        self.conn
            .execute(UPSERT_SQL, params![first_name, last_name, phone])?;
        Ok(())
    }

    /// Upsert every entry in order inside one transaction.
    ///
    /// Either all entries are applied and their count returned, or the
    /// transaction is rolled back and nothing is persisted. Later entries for
    /// the same first name overwrite earlier ones.
    pub fn upsert_all(&self, entries: &[BatchEntry]) -> Result<usize> {
        if entries.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.unchecked_transaction()?;
        debug!(count = entries.len(), "upsert batch started");

        let mut applied = 0;
        {
            let mut stmt = tx.prepare(UPSERT_SQL)?;
            for entry in entries {
                let result =
                    stmt.execute(params![entry.first_name, entry.last_name, entry.phone]);
                if let Err(e) = result {
                    // Dropping `tx` rolls the batch back
                    warn!(
                        first_name = %entry.first_name,
                        error = %e,
                        "upsert failed, rolling back batch"
                    );
                    return Err(e.into());
                }
                applied += 1;
            }
        }

        tx.commit()?;
        debug!(applied, "upsert batch committed");
        Ok(applied)
    }

    // ==================== CONTACT READ ====================

    pub fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, first_name, last_name, phone FROM contacts WHERE id = ?")?;

        match stmt.query_row([id], Self::row_to_contact) {
            Ok(contact) => Ok(Some(contact)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Exact, case-sensitive lookup by the natural key.
    pub fn find_by_name(&self, first_name: &str) -> Result<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, first_name, last_name, phone FROM contacts WHERE first_name = ?")?;

        match stmt.query_row([first_name], Self::row_to_contact) {
            Ok(contact) => Ok(Some(contact)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Phones are not unique, so several contacts may match.
    pub fn find_by_phone(&self, phone: &str) -> Result<Vec<Contact>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, first_name, last_name, phone FROM contacts WHERE phone = ? ORDER BY id",
        )?;

        let contacts = stmt
            .query_map([phone], Self::row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(contacts)
    }

    pub fn list_contacts(&self) -> Result<Vec<Contact>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, first_name, last_name, phone FROM contacts ORDER BY id")?;

        let contacts = stmt
            .query_map([], Self::row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(contacts)
    }

    pub fn list_contacts_page(&self, limit: u32, offset: u32) -> Result<Vec<Contact>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, first_name, last_name, phone FROM contacts ORDER BY id LIMIT ? OFFSET ?",
        )?;

        let contacts = stmt
            .query_map([limit, offset], Self::row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(contacts)
    }

    pub fn count_contacts(&self) -> Result<u32> {
        let count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Case-insensitive substring search over first name, last name and phone.
    pub fn search_contacts(&self, pattern: &str) -> Result<Vec<Contact>> {
        let like = format!("%{}%", Self::escape_like(pattern));
        let mut stmt = self.conn.prepare(
            r#"SELECT id, first_name, last_name, phone FROM contacts
               WHERE first_name LIKE ?1 ESCAPE '\'
                  OR last_name LIKE ?1 ESCAPE '\'
                  OR phone LIKE ?1 ESCAPE '\'
               ORDER BY id"#,
        )?;

        let contacts = stmt
            .query_map([like], Self::row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(contacts)
    }

    /// Escape LIKE metacharacters (% _ \)
    fn escape_like(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '%' | '_' | '\\' => {
                    result.push('\\');
                    result.push(c);
                }
                _ => result.push(c),
            }
        }
        result
    }

    // ==================== CONTACT UPDATE ====================

    /// Returns false when no contact has this id.
    pub fn update_first_name(&self, id: i64, first_name: &str) -> Result<bool> {
        let rows = self.conn.execute(
            "UPDATE contacts SET first_name = ? WHERE id = ?",
            params![first_name, id],
        )?;
        Ok(rows > 0)
    }

    /// Returns false when no contact has this id.
    pub fn update_phone(&self, id: i64, phone: &str) -> Result<bool> {
        let rows = self
            .conn
            .execute("UPDATE contacts SET phone = ? WHERE id = ?", params![phone, id])?;
        Ok(rows > 0)
    }

    // ==================== CONTACT DELETE ====================

    pub fn delete_by_name(&self, first_name: &str) -> Result<usize> {
        let rows = self
            .conn
            .execute("DELETE FROM contacts WHERE first_name = ?", [first_name])?;
        debug!(first_name, rows, "deleted by name");
        Ok(rows)
    }

    pub fn delete_by_phone(&self, phone: &str) -> Result<usize> {
        let rows = self
            .conn
            .execute("DELETE FROM contacts WHERE phone = ?", [phone])?;
        debug!(phone, rows, "deleted by phone");
        Ok(rows)
    }

    // ==================== ROW MAPPERS ====================

    fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
        Ok(Contact {
            id: row.get("id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            phone: row.get("phone")?,
        })
    }
}
