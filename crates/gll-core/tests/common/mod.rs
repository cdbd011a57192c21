//! Shared test support: a scripted [`LibraryLoader`] and fake extended
//! resolvers with recognisable addresses.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::{c_char, c_void, CStr};
use std::rc::Rc;

use gll_core::platform::LibraryLoader;
use gll_core::types::ProcAddress;

/// Base of addresses handed out by [`fake_egl_get_proc_address`]
pub const EGL_BASE: usize = 0xE000_0000;
/// Base of addresses handed out by [`fake_glx_get_proc_address`]
pub const GLX_BASE: usize = 0x6000_0000;
/// Base of addresses handed out by [`fake_wgl_get_proc_address`]
pub const WGL_BASE: usize = 0x3000_0000;

/// Address a fake resolver with `base` returns for `name`.
pub fn tagged(base: usize, name: &str) -> ProcAddress
{
    ProcAddress::new((base + name.len()) as *const c_void)
}

/// Arbitrary non-null address for direct exports.
pub fn export(value: usize) -> ProcAddress
{
    ProcAddress::new(value as *const c_void)
}

fn requested_name<'a>(name: *const c_char) -> &'a str
{
    // SAFETY: the strategies always pass a NUL-terminated CString.
    unsafe { CStr::from_ptr(name) }.to_str().unwrap_or_default()
}

/// `eglGetProcAddress` stand-in: resolves every `gl*` name.
pub unsafe extern "C" fn fake_egl_get_proc_address(name: *const c_char) -> *const c_void
{
    match requested_name(name) {
        name if name.starts_with("gl") => tagged(EGL_BASE, name).as_ptr(),
        _ => std::ptr::null(),
    }
}

/// `glXGetProcAddressARB` stand-in: resolves every `gl*` name.
pub unsafe extern "C" fn fake_glx_get_proc_address(name: *const c_char) -> *const c_void
{
    match requested_name(name) {
        name if name.starts_with("gl") => tagged(GLX_BASE, name).as_ptr(),
        _ => std::ptr::null(),
    }
}

/// `wglGetProcAddress` stand-in.
///
/// Like the real one it refuses GL 1.1 names: `glClear` comes back null, and
/// `glViewport`, `glFlush`, `glFinish`, `glGetString` come back as the
/// sentinels `1`, `2`, `3` and `-1`.
pub unsafe extern "system" fn fake_wgl_get_proc_address(name: *const c_char) -> *const c_void
{
    match requested_name(name) {
        "glClear" => std::ptr::null(),
        "glViewport" => 1 as *const c_void,
        "glFlush" => 2 as *const c_void,
        "glFinish" => 3 as *const c_void,
        "glGetString" => usize::MAX as *const c_void,
        name if name.starts_with("gl") => tagged(WGL_BASE, name).as_ptr(),
        _ => std::ptr::null(),
    }
}

pub fn egl_resolver() -> ProcAddress
{
    ProcAddress::new(fake_egl_get_proc_address as *const c_void)
}

pub fn glx_resolver() -> ProcAddress
{
    ProcAddress::new(fake_glx_get_proc_address as *const c_void)
}

pub fn wgl_resolver() -> ProcAddress
{
    ProcAddress::new(fake_wgl_get_proc_address as *const c_void)
}

/// What the fake process looks like, plus a log of every loader call
#[derive(Debug, Default)]
pub struct MockState
{
    /// Libraries already mapped into the process; probe succeeds
    loaded: BTreeSet<String>,
    /// Libraries on disk; open succeeds
    available: BTreeSet<String>,
    exports: BTreeMap<(String, String), ProcAddress>,
    next_handle: u32,
    /// Handle id -> library name, for handles not yet closed
    live: BTreeMap<u32, String>,
    pub probed: Vec<String>,
    pub opened: Vec<String>,
    pub closed: Vec<String>,
}

/// Handle returned by [`MockLoader`]
#[derive(Debug, PartialEq, Eq)]
pub struct MockLibrary
{
    id: u32,
    name: String,
}

/// Scripted loader; clones share state so a test can keep one for inspection
#[derive(Debug, Clone, Default)]
pub struct MockLoader
{
    state: Rc<RefCell<MockState>>,
}

impl MockLoader
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Mark `name` as already loaded in the process.
    pub fn loaded(self, name: &str) -> Self
    {
        self.state.borrow_mut().loaded.insert(name.to_string());
        self
    }

    /// Mark `name` as openable.
    pub fn available(self, name: &str) -> Self
    {
        self.state.borrow_mut().available.insert(name.to_string());
        self
    }

    /// Make `library` export `symbol` at `address`.
    pub fn exports(self, library: &str, symbol: &str, address: ProcAddress) -> Self
    {
        self.state
            .borrow_mut()
            .exports
            .insert((library.to_string(), symbol.to_string()), address);
        self
    }

    /// Names of libraries with handles still open, sorted.
    pub fn live(&self) -> Vec<String>
    {
        let mut live: Vec<String> = self.state.borrow().live.values().cloned().collect();
        live.sort();
        live
    }

    pub fn probed(&self) -> Vec<String>
    {
        self.state.borrow().probed.clone()
    }

    pub fn opened(&self) -> Vec<String>
    {
        self.state.borrow().opened.clone()
    }

    pub fn closed(&self) -> Vec<String>
    {
        self.state.borrow().closed.clone()
    }

    fn hand_out(&self, name: &str) -> MockLibrary
    {
        let mut state = self.state.borrow_mut();
        state.next_handle += 1;
        let id = state.next_handle;
        state.live.insert(id, name.to_string());
        MockLibrary {
            id,
            name: name.to_string(),
        }
    }
}

impl LibraryLoader for MockLoader
{
    type Library = MockLibrary;

    fn probe(&mut self, name: &str) -> Option<MockLibrary>
    {
        let loaded = {
            let mut state = self.state.borrow_mut();
            state.probed.push(name.to_string());
            state.loaded.contains(name)
        };
        loaded.then(|| self.hand_out(name))
    }

    fn open(&mut self, name: &str) -> Option<MockLibrary>
    {
        let openable = {
            let mut state = self.state.borrow_mut();
            state.opened.push(name.to_string());
            state.loaded.contains(name) || state.available.contains(name)
        };
        openable.then(|| self.hand_out(name))
    }

    fn symbol(&self, library: &MockLibrary, symbol: &str) -> ProcAddress
    {
        let state = self.state.borrow();
        assert!(state.live.contains_key(&library.id), "lookup through closed handle {library:?}");
        state
            .exports
            .get(&(library.name.clone(), symbol.to_string()))
            .copied()
            .unwrap_or(ProcAddress::NULL)
    }

    fn close(&mut self, library: MockLibrary)
    {
        let mut state = self.state.borrow_mut();
        let released = state.live.remove(&library.id);
        assert!(released.is_some(), "handle {library:?} closed twice");
        state.closed.push(library.name);
    }
}
