/// Import module name under which the shim registers its WASI functions.
pub const WASI_MODULE: &str = "wasi_snapshot_preview1";

/// Import module for the process-identity functions the host supplies.
pub const ENV_MODULE: &str = "env";

/// Preview1 functions the shim implements, sorted.
pub const IMPLEMENTED_IMPORTS: &[&str] = &[
    "clock_time_get",
    "fd_close",
    "fd_fdstat_get",
    "fd_fdstat_set_flags",
    "fd_filestat_get",
    "fd_prestat_dir_name",
    "fd_prestat_get",
    "fd_read",
    "path_open",
    "poll_oneoff",
    "proc_exit",
    "random_get",
    "sock_recv",
    "sock_send",
];

/// The rest of preview1, sorted. These link, but every call raises a host
/// error.
pub const STUBBED_IMPORTS: &[&str] = &[
    "args_get",
    "args_sizes_get",
    "clock_res_get",
    "environ_get",
    "environ_sizes_get",
    "fd_advise",
    "fd_allocate",
    "fd_datasync",
    "fd_fdstat_set_rights",
    "fd_filestat_set_size",
    "fd_filestat_set_times",
    "fd_pread",
    "fd_pwrite",
    "fd_readdir",
    "fd_renumber",
    "fd_seek",
    "fd_sync",
    "fd_tell",
    "fd_write",
    "path_create_directory",
    "path_filestat_get",
    "path_filestat_set_times",
    "path_link",
    "path_readlink",
    "path_remove_directory",
    "path_rename",
    "path_symlink",
    "path_unlink_file",
    "proc_raise",
    "sched_yield",
    "sock_shutdown",
];

/// `env` functions answering with a fixed process identity, sorted.
pub const ENV_IMPORTS: &[&str] = &["getegid", "geteuid", "getgid", "getpid", "getuid"];

/// How the host resolves a function import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linkage {
    /// Linked to a working implementation.
    Provided,
    /// Linked, but fails when called.
    Stubbed,
    /// Not registered; instantiation fails.
    Unlinked,
}

/// An export the shim looks up when it initializes a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredExport {
    pub name: &'static str,
    pub kind: &'static str,
}

pub const REQUIRED_EXPORTS: &[RequiredExport] = &[
    RequiredExport {
        name: "memory",
        kind: "memory",
    },
    RequiredExport {
        name: "_initialize",
        kind: "func",
    },
];

fn listed(set: &[&str], name: &str) -> bool {
    set.binary_search(&name).is_ok()
}

/// Resolve a function import of `module`.`name` against the host surface.
pub fn linkage(module: &str, name: &str) -> Linkage {
    match module {
        WASI_MODULE if listed(IMPLEMENTED_IMPORTS, name) => Linkage::Provided,
        WASI_MODULE if listed(STUBBED_IMPORTS, name) => Linkage::Stubbed,
        ENV_MODULE if listed(ENV_IMPORTS, name) => Linkage::Provided,
        _ => Linkage::Unlinked,
    }
}
