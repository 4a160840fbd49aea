//! Database connection lifecycle and one-shot execution helpers.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::path::Path;
use std::ptr;

use libsqlite3_sys as ffi;
use tracing::debug;

use crate::bind::Params;
use crate::decode::Decode;
use crate::error::Error;
use crate::statement::{Statement, Step};

/// Access mode for opening a database file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Open an existing database read-only.
    ReadOnly,
    /// Open an existing database for reading and writing.
    ReadWrite,
    /// Open for reading and writing, creating the file if absent.
    Create,
}

impl OpenMode {
    fn flags(self) -> i32 {
        match self {
            OpenMode::ReadOnly => ffi::SQLITE_OPEN_READONLY,
            OpenMode::ReadWrite => ffi::SQLITE_OPEN_READWRITE,
            OpenMode::Create => ffi::SQLITE_OPEN_READWRITE | ffi::SQLITE_OPEN_CREATE,
        }
    }
}

/// An exclusively owned database handle.
///
/// Statements prepared through [`prepare`](Connection::prepare) borrow the
/// connection, so the borrow checker guarantees the connection outlives
/// every cursor; the handle is closed exactly once on drop. The handle is
/// neither `Send` nor `Sync`: driving it from several threads requires
/// synchronization the caller supplies.
pub struct Connection {
    db: *mut ffi::sqlite3,
}

impl Connection {
    /// Open the database at `path`, creating it if absent.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection, Error> {
        Connection::open_with(path, OpenMode::Create)
    }

    /// Open the database at `path` with an explicit access mode.
    pub fn open_with<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<Connection, Error> {
        let display_path = path.as_ref().display().to_string();
        let c_path = CString::new(display_path.as_bytes()).map_err(|_| Error::Open {
            path: display_path.clone(),
            code: ffi::SQLITE_MISUSE,
            message: "path contains an interior NUL byte".to_string(),
        })?;

        let mut db: *mut ffi::sqlite3 = ptr::null_mut();
        let code =
            unsafe { ffi::sqlite3_open_v2(c_path.as_ptr(), &mut db, mode.flags(), ptr::null()) };
        if code != ffi::SQLITE_OK {
            // A failed open can still hand back a handle carrying the error
            // text; it must be closed here.
            let message = if db.is_null() {
                String::from("out of memory")
            } else {
                let message = unsafe { CStr::from_ptr(ffi::sqlite3_errmsg(db)) }
                    .to_string_lossy()
                    .into_owned();
                unsafe {
                    ffi::sqlite3_close_v2(db);
                }
                message
            };
            return Err(Error::Open {
                path: display_path,
                code,
                message,
            });
        }

        debug!(path = %display_path, ?mode, "opened database");
        Ok(Connection { db })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Connection, Error> {
        Connection::open_with(":memory:", OpenMode::Create)
    }

    fn error_message(&self) -> String {
        unsafe {
            let msg = ffi::sqlite3_errmsg(self.db);
            if msg.is_null() {
                String::from("unknown error")
            } else {
                CStr::from_ptr(msg).to_string_lossy().into_owned()
            }
        }
    }

    /// Compile `sql` into a statement cursor borrowing this connection.
    pub fn prepare(&self, sql: &str) -> Result<Statement<'_>, Error> {
        let c_sql = CString::new(sql).map_err(|_| Error::NulInSql)?;
        let mut stmt: *mut ffi::sqlite3_stmt = ptr::null_mut();
        let code = unsafe {
            ffi::sqlite3_prepare_v2(self.db, c_sql.as_ptr(), -1, &mut stmt, ptr::null_mut())
        };
        if code != ffi::SQLITE_OK {
            return Err(Error::Prepare {
                code,
                message: self.error_message(),
                sql: sql.to_string(),
            });
        }
        if stmt.is_null() {
            // Whitespace or comment-only SQL compiles to nothing.
            return Err(Error::Prepare {
                code,
                message: String::from("statement is empty"),
                sql: sql.to_string(),
            });
        }

        debug!(sql, "prepared statement");
        Ok(Statement::from_raw(stmt))
    }

    /// Run one or more semicolon-separated statements, discarding rows.
    pub fn execute_batch(&self, sql: &str) -> Result<(), Error> {
        let c_sql = CString::new(sql).map_err(|_| Error::NulInSql)?;
        let mut errmsg: *mut c_char = ptr::null_mut();
        let code = unsafe {
            ffi::sqlite3_exec(self.db, c_sql.as_ptr(), None, ptr::null_mut(), &mut errmsg)
        };
        if code != ffi::SQLITE_OK {
            let message = if errmsg.is_null() {
                self.error_message()
            } else {
                let message = unsafe { CStr::from_ptr(errmsg) }.to_string_lossy().into_owned();
                unsafe {
                    ffi::sqlite3_free(errmsg.cast());
                }
                message
            };
            return Err(Error::Exec { code, message });
        }

        debug!(sql, "executed batch");
        Ok(())
    }

    /// Prepare, bind and step a statement once, then discard it.
    ///
    /// Returns the cursor status of that single step, so callers can tell a
    /// row-producing statement from a completed one.
    pub fn exec<P: Params>(&self, sql: &str, params: P) -> Result<Step, Error> {
        let mut stmt = self.prepare(sql)?;
        stmt.exec(params)
    }

    /// Prepare, bind, step and decode the single produced row.
    ///
    /// # Panics
    ///
    /// Panics if the statement completes without producing a row; use this
    /// only for queries that always yield one (aggregates, `RETURNING`).
    pub fn exec_get<T: Decode, P: Params>(&self, sql: &str, params: P) -> Result<T, Error> {
        let mut stmt = self.prepare(sql)?;
        stmt.exec_get(params)
    }

    /// Number of rows changed by the most recently completed statement.
    pub fn changes(&self) -> usize {
        unsafe { ffi::sqlite3_changes(self.db) as usize }
    }

    /// Rowid assigned by the most recent successful insert.
    pub fn last_insert_rowid(&self) -> i64 {
        unsafe { ffi::sqlite3_last_insert_rowid(self.db) }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        // Lifetimes guarantee no statement outlives the connection, so the
        // close cannot be deferred by outstanding cursors.
        unsafe {
            ffi::sqlite3_close_v2(self.db);
        }
    }
}
