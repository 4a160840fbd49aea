//! Prepared statement cursors and row access.
//!
//! A [`Statement`] exclusively owns one compiled statement handle for the
//! lifetime of its borrow of the [`Connection`](crate::Connection) that
//! prepared it, and finalizes the handle exactly once on drop. All FFI
//! against the statement half of the engine API lives in this module;
//! the `bind`, `decode`, `visit` and `collect` modules build on the safe
//! surface exported here.
//!
//! # Cursor protocol
//!
//! [`Statement::step`] advances the cursor and reports [`Step::Row`] when a
//! row is available or [`Step::Done`] when the statement is exhausted. Any
//! other engine code becomes [`Error::Step`]. `reset` rewinds an exhausted
//! or errored cursor for reuse; it deliberately does *not* forget previously
//! bound values, so a loop can rebind a subset of slots per iteration.
//! [`Statement::clear_bindings`] is the explicit clean slate.
//!
//! # Slot and column numbering
//!
//! Bind slots are 1-based and result columns are 0-based, matching the
//! engine's own numbering. The `exec_from`/`rexec_from` variants take the
//! base slot so a prefix of slots can stay bound across iterations while a
//! trailing tuple is rebound each time.

use std::ffi::CStr;
use std::marker::PhantomData;
use std::os::raw::{c_char, c_int, c_void};
use std::slice;

use libsqlite3_sys as ffi;

use crate::bind::{Bind, BindValue, Params};
use crate::connection::Connection;
use crate::decode::Decode;
use crate::error::Error;

// The engine must never see a dangling pointer, even with a zero length.
static EMPTY_BYTES: [u8; 1] = [0];
static EMPTY_UTF16: [u16; 1] = [0];

/// Outcome of advancing a statement cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cursor is positioned on a row; columns may be read.
    Row,
    /// The statement is exhausted; reset before stepping again.
    Done,
}

/// Storage class of a result column in the current row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Text,
    Blob,
    Null,
}

/// A prepared statement, borrowing the connection that compiled it.
pub struct Statement<'conn> {
    stmt: *mut ffi::sqlite3_stmt,
    conn: PhantomData<&'conn Connection>,
}

impl<'conn> Statement<'conn> {
    // Caller guarantees the pointer came from a successful prepare.
    pub(crate) fn from_raw(stmt: *mut ffi::sqlite3_stmt) -> Statement<'conn> {
        Statement {
            stmt,
            conn: PhantomData,
        }
    }

    fn error_message(&self) -> String {
        unsafe {
            let db = ffi::sqlite3_db_handle(self.stmt);
            let msg = ffi::sqlite3_errmsg(db);
            if msg.is_null() {
                String::from("unknown error")
            } else {
                CStr::from_ptr(msg).to_string_lossy().into_owned()
            }
        }
    }

    /// Advance the cursor by one row.
    ///
    /// Returns [`Step::Row`] while rows remain and [`Step::Done`] once the
    /// statement is exhausted. Any other engine code is surfaced as
    /// [`Error::Step`]; the cursor may be [`reset`](Self::reset) afterwards.
    pub fn step(&mut self) -> Result<Step, Error> {
        let code = unsafe { ffi::sqlite3_step(self.stmt) };
        match code {
            ffi::SQLITE_ROW => Ok(Step::Row),
            ffi::SQLITE_DONE => Ok(Step::Done),
            code => Err(Error::Step {
                code,
                message: self.error_message(),
            }),
        }
    }

    /// Rewind the cursor so the statement can run again.
    ///
    /// Bound values survive the reset; call
    /// [`clear_bindings`](Self::clear_bindings) to drop them. The engine's
    /// return code here only repeats the most recent step failure, which the
    /// caller already saw, so it is ignored.
    pub fn reset(&mut self) {
        unsafe {
            ffi::sqlite3_reset(self.stmt);
        }
    }

    /// Reset every bind slot to NULL.
    pub fn clear_bindings(&mut self) {
        unsafe {
            ffi::sqlite3_clear_bindings(self.stmt);
        }
    }

    /// Bind one value to the given 1-based slot.
    pub fn bind_at<T: Bind + ?Sized>(&mut self, slot: usize, value: &T) -> Result<(), Error> {
        let idx = slot as c_int;
        let code = match value.bind_value() {
            BindValue::Int(v) => unsafe { ffi::sqlite3_bind_int(self.stmt, idx, v) },
            BindValue::Int64(v) => unsafe { ffi::sqlite3_bind_int64(self.stmt, idx, v) },
            BindValue::Double(v) => unsafe { ffi::sqlite3_bind_double(self.stmt, idx, v) },
            BindValue::Text(v) => unsafe {
                ffi::sqlite3_bind_text(
                    self.stmt,
                    idx,
                    text_ptr(v.as_bytes()),
                    v.len() as c_int,
                    ffi::SQLITE_TRANSIENT(),
                )
            },
            BindValue::StaticText(v) => unsafe {
                ffi::sqlite3_bind_text(
                    self.stmt,
                    idx,
                    text_ptr(v.as_bytes()),
                    v.len() as c_int,
                    ffi::SQLITE_STATIC(),
                )
            },
            BindValue::Text16(v) => unsafe {
                ffi::sqlite3_bind_text16(
                    self.stmt,
                    idx,
                    utf16_ptr(v),
                    (v.len() * 2) as c_int,
                    ffi::SQLITE_TRANSIENT(),
                )
            },
            BindValue::StaticText16(v) => unsafe {
                ffi::sqlite3_bind_text16(
                    self.stmt,
                    idx,
                    utf16_ptr(v),
                    (v.len() * 2) as c_int,
                    ffi::SQLITE_STATIC(),
                )
            },
            BindValue::Blob(v) => unsafe {
                ffi::sqlite3_bind_blob(
                    self.stmt,
                    idx,
                    blob_ptr(v),
                    v.len() as c_int,
                    ffi::SQLITE_TRANSIENT(),
                )
            },
            BindValue::StaticBlob(v) => unsafe {
                ffi::sqlite3_bind_blob(
                    self.stmt,
                    idx,
                    blob_ptr(v),
                    v.len() as c_int,
                    ffi::SQLITE_STATIC(),
                )
            },
            BindValue::Null => unsafe { ffi::sqlite3_bind_null(self.stmt, idx) },
            BindValue::ZeroBlob(n) => unsafe { ffi::sqlite3_bind_zeroblob64(self.stmt, idx, n) },
        };

        if code == ffi::SQLITE_OK {
            Ok(())
        } else {
            Err(Error::Bind {
                slot,
                code,
                message: self.error_message(),
            })
        }
    }

    /// Bind a tuple of values to consecutive slots starting at `base`.
    ///
    /// Fail-fast: the first rejected slot aborts the call and later slots
    /// are never attempted.
    pub fn bind_from<P: Params>(&mut self, base: usize, params: P) -> Result<(), Error> {
        params.bind_all(self, base)
    }

    /// Bind `params` starting at slot 1, then step once.
    pub fn exec<P: Params>(&mut self, params: P) -> Result<Step, Error> {
        self.exec_from(1, params)
    }

    /// Bind `params` starting at `base`, then step once.
    ///
    /// Slots below `base` keep whatever was bound to them, which supports
    /// binding a fixed prefix once and rebinding the tail per iteration.
    pub fn exec_from<P: Params>(&mut self, base: usize, params: P) -> Result<Step, Error> {
        params.bind_all(self, base)?;
        self.step()
    }

    /// Reset, bind `params` starting at slot 1, then step once.
    ///
    /// Does not clear bindings: slots the tuple does not cover keep their
    /// previous values.
    pub fn rexec<P: Params>(&mut self, params: P) -> Result<Step, Error> {
        self.rexec_from(1, params)
    }

    /// Reset, bind `params` starting at `base`, then step once.
    pub fn rexec_from<P: Params>(&mut self, base: usize, params: P) -> Result<Step, Error> {
        self.reset();
        self.exec_from(base, params)
    }

    /// View the current row. Only meaningful after a step reported
    /// [`Step::Row`].
    pub fn row(&self) -> Row<'_> {
        Row { stmt: self }
    }

    /// Decode the current row starting at column 0.
    pub fn get<T: Decode>(&self) -> T {
        T::decode(&self.row(), 0)
    }

    /// Decode the current row starting at the given column.
    pub fn get_at<T: Decode>(&self, base: usize) -> T {
        T::decode(&self.row(), base)
    }

    /// Bind, step once and decode the produced row.
    ///
    /// # Panics
    ///
    /// Panics if the statement completes without producing a row; use this
    /// only for queries that always yield one (aggregates, `RETURNING`).
    pub fn exec_get<T: Decode, P: Params>(&mut self, params: P) -> Result<T, Error> {
        match self.exec(params)? {
            Step::Row => Ok(self.get()),
            Step::Done => panic!("statement produced no row"),
        }
    }

    /// Reset, bind, step once and decode the produced row.
    ///
    /// # Panics
    ///
    /// Panics if the statement completes without producing a row.
    pub fn rexec_get<T: Decode, P: Params>(&mut self, params: P) -> Result<T, Error> {
        match self.rexec(params)? {
            Step::Row => Ok(self.get()),
            Step::Done => panic!("statement produced no row"),
        }
    }

    /// Number of columns the statement produces.
    pub fn column_count(&self) -> usize {
        unsafe { ffi::sqlite3_column_count(self.stmt) as usize }
    }

    /// Name of a result column, or `None` when the index is out of range.
    pub fn column_name(&self, col: usize) -> Option<String> {
        unsafe {
            let name = ffi::sqlite3_column_name(self.stmt, col as c_int);
            if name.is_null() {
                None
            } else {
                Some(CStr::from_ptr(name).to_string_lossy().into_owned())
            }
        }
    }

    /// Byte length of a column value in the current row.
    pub fn column_bytes(&self, col: usize) -> usize {
        unsafe { ffi::sqlite3_column_bytes(self.stmt, col as c_int) as usize }
    }

    /// Storage class of a column value in the current row.
    pub fn column_type(&self, col: usize) -> ColumnType {
        self.row().column_type(col)
    }
}

impl Drop for Statement<'_> {
    fn drop(&mut self) {
        // Finalize's return code repeats the most recent step failure.
        unsafe {
            ffi::sqlite3_finalize(self.stmt);
        }
    }
}

/// Read-only view of the row a statement cursor is positioned on.
///
/// Column reads are total: a NULL column reads as zero, the empty string or
/// an empty vector, and text that is not valid UTF-8 is converted lossily.
/// Reading past the last column yields the NULL behavior.
pub struct Row<'s> {
    stmt: &'s Statement<'s>,
}

impl Row<'_> {
    pub fn get_i32(&self, col: usize) -> i32 {
        unsafe { ffi::sqlite3_column_int(self.stmt.stmt, col as c_int) }
    }

    pub fn get_i64(&self, col: usize) -> i64 {
        unsafe { ffi::sqlite3_column_int64(self.stmt.stmt, col as c_int) }
    }

    pub fn get_f64(&self, col: usize) -> f64 {
        unsafe { ffi::sqlite3_column_double(self.stmt.stmt, col as c_int) }
    }

    /// UTF-8 text of a column; NULL reads as the empty string.
    pub fn get_text(&self, col: usize) -> String {
        unsafe {
            let ptr = ffi::sqlite3_column_text(self.stmt.stmt, col as c_int);
            if ptr.is_null() {
                return String::new();
            }
            let len = ffi::sqlite3_column_bytes(self.stmt.stmt, col as c_int) as usize;
            let bytes = slice::from_raw_parts(ptr, len);
            String::from_utf8_lossy(bytes).into_owned()
        }
    }

    /// UTF-16 code units of a column; NULL reads as an empty vector.
    pub fn get_text16(&self, col: usize) -> Vec<u16> {
        unsafe {
            let ptr = ffi::sqlite3_column_text16(self.stmt.stmt, col as c_int) as *const u16;
            if ptr.is_null() {
                return Vec::new();
            }
            let len = ffi::sqlite3_column_bytes16(self.stmt.stmt, col as c_int) as usize;
            slice::from_raw_parts(ptr, len / 2).to_vec()
        }
    }

    /// Raw bytes of a column; NULL and the empty blob read as an empty
    /// vector.
    pub fn get_blob(&self, col: usize) -> Vec<u8> {
        unsafe {
            let ptr = ffi::sqlite3_column_blob(self.stmt.stmt, col as c_int);
            if ptr.is_null() {
                return Vec::new();
            }
            let len = ffi::sqlite3_column_bytes(self.stmt.stmt, col as c_int) as usize;
            slice::from_raw_parts(ptr as *const u8, len).to_vec()
        }
    }

    pub fn is_null(&self, col: usize) -> bool {
        self.column_type(col) == ColumnType::Null
    }

    pub fn column_type(&self, col: usize) -> ColumnType {
        let code = unsafe { ffi::sqlite3_column_type(self.stmt.stmt, col as c_int) };
        match code {
            ffi::SQLITE_INTEGER => ColumnType::Integer,
            ffi::SQLITE_FLOAT => ColumnType::Float,
            ffi::SQLITE_TEXT => ColumnType::Text,
            ffi::SQLITE_BLOB => ColumnType::Blob,
            _ => ColumnType::Null,
        }
    }
}

fn text_ptr(bytes: &[u8]) -> *const c_char {
    if bytes.is_empty() {
        EMPTY_BYTES.as_ptr() as *const c_char
    } else {
        bytes.as_ptr() as *const c_char
    }
}

fn blob_ptr(bytes: &[u8]) -> *const c_void {
    if bytes.is_empty() {
        EMPTY_BYTES.as_ptr() as *const c_void
    } else {
        bytes.as_ptr() as *const c_void
    }
}

fn utf16_ptr(units: &[u16]) -> *const c_void {
    if units.is_empty() {
        EMPTY_UTF16.as_ptr() as *const c_void
    } else {
        units.as_ptr() as *const c_void
    }
}
