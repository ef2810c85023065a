//! Windows process access.
//!
//! Opens a target process for reading and resolves its main module base.
//! The rest of the crate only sees the [`ReadMemory`] trait, so none of this
//! is needed for tests.

use std::ffi::c_void;

use tracing::debug;
use windows::Win32::Foundation::{BOOL, CloseHandle, HANDLE};
use windows::Win32::System::Diagnostics::Debug::ReadProcessMemory;
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, MODULEENTRY32W, Module32FirstW, PROCESSENTRY32W, Process32FirstW,
    Process32NextW, TH32CS_SNAPMODULE, TH32CS_SNAPMODULE32, TH32CS_SNAPPROCESS,
};
use windows::Win32::System::Threading::{OpenProcess, PROCESS_QUERY_INFORMATION, PROCESS_VM_READ};

use crate::error::{Error, Result};
use crate::memory::ReadMemory;

/// An open handle to the foreign process.
#[derive(Debug)]
pub struct ProcessHandle {
    pub pid: u32,
    pub base_address: u64,
    pub module_size: u32,
    handle: HANDLE,
}

impl ProcessHandle {
    /// Find a process by executable name and open it for reading.
    pub fn find_and_open(process_name: &str) -> Result<Self> {
        let pid = Self::find_pid(process_name)?;
        Self::open(pid)
    }

    /// Open a process by pid and resolve its main module base.
    pub fn open(pid: u32) -> Result<Self> {
        let handle = unsafe {
            OpenProcess(PROCESS_QUERY_INFORMATION | PROCESS_VM_READ, BOOL::from(false), pid)
        }
        .map_err(|e| Error::ProcessOpenFailed(format!("pid {}: {}", pid, e)))?;

        let (base_address, module_size) = Self::main_module(pid)?;
        debug!(
            "Opened process {} (base 0x{:X}, module size 0x{:X})",
            pid, base_address, module_size
        );

        Ok(Self {
            pid,
            base_address,
            module_size,
            handle,
        })
    }

    fn find_pid(process_name: &str) -> Result<u32> {
        let snapshot = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) }
            .map_err(|e| Error::ProcessOpenFailed(format!("snapshot failed: {}", e)))?;

        let mut entry = PROCESSENTRY32W {
            dwSize: std::mem::size_of::<PROCESSENTRY32W>() as u32,
            ..Default::default()
        };

        let wanted = process_name.to_lowercase();
        let mut result = unsafe { Process32FirstW(snapshot, &mut entry) };
        while result.is_ok() {
            let name = String::from_utf16_lossy(
                &entry.szExeFile[..entry
                    .szExeFile
                    .iter()
                    .position(|&c| c == 0)
                    .unwrap_or(entry.szExeFile.len())],
            );
            if name.to_lowercase() == wanted {
                unsafe {
                    let _ = CloseHandle(snapshot);
                }
                return Ok(entry.th32ProcessID);
            }
            result = unsafe { Process32NextW(snapshot, &mut entry) };
        }

        unsafe {
            let _ = CloseHandle(snapshot);
        }
        Err(Error::ProcessNotFound(process_name.to_string()))
    }

    fn main_module(pid: u32) -> Result<(u64, u32)> {
        let snapshot =
            unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPMODULE | TH32CS_SNAPMODULE32, pid) }
                .map_err(|e| Error::ProcessOpenFailed(format!("module snapshot failed: {}", e)))?;

        let mut entry = MODULEENTRY32W {
            dwSize: std::mem::size_of::<MODULEENTRY32W>() as u32,
            ..Default::default()
        };

        let result = unsafe { Module32FirstW(snapshot, &mut entry) };
        unsafe {
            let _ = CloseHandle(snapshot);
        }
        result.map_err(|e| Error::ProcessOpenFailed(format!("no main module for pid {}: {}", pid, e)))?;

        Ok((entry.modBaseAddr as u64, entry.modBaseSize))
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}

/// Memory reader over an open process handle.
pub struct MemoryReader<'a> {
    process: &'a ProcessHandle,
}

impl<'a> MemoryReader<'a> {
    pub fn new(process: &'a ProcessHandle) -> Self {
        Self { process }
    }
}

impl ReadMemory for MemoryReader<'_> {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; size];
        let mut bytes_read = 0usize;

        unsafe {
            ReadProcessMemory(
                self.process.handle,
                address as *const c_void,
                buffer.as_mut_ptr() as *mut c_void,
                size,
                Some(&mut bytes_read as *mut usize),
            )
        }
        .map_err(|e| Error::read_failed(address, e.to_string()))?;

        if bytes_read != size {
            return Err(Error::read_failed(
                address,
                format!("short read: {} of {} bytes", bytes_read, size),
            ));
        }

        Ok(buffer)
    }

    fn base_address(&self) -> u64 {
        self.process.base_address
    }
}
