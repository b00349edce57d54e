use async_trait::async_trait;
use resolver_audit_application::ports::ResolverStateReader;
use resolver_audit_domain::{DomainError, ResolverState};
use std::sync::Mutex;
use tracing::debug;

/// The resolver library keeps its configuration in process-wide state with no
/// per-caller isolation. Every init..close window runs under this lock.
static RESOLVER_LOCK: Mutex<()> = Mutex::new(());

/// Initializes the resolver library, copies its default state and releases it.
///
/// Blocking; call from a blocking context.
pub fn read_default_state() -> Result<ResolverState, DomainError> {
    let _lock = RESOLVER_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let state = platform::snapshot()?;

    debug!(
        options = state.options,
        nameservers = state.nameservers.len(),
        sortlist = state.sortlist.len(),
        "Resolver library state copied"
    );
    Ok(state)
}

/// Reads the default resolver state through the OS resolver library (libresolv)
#[derive(Debug, Default, Clone, Copy)]
pub struct LibResolvReader;

impl LibResolvReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResolverStateReader for LibResolvReader {
    async fn read_state(&self) -> Result<ResolverState, DomainError> {
        tokio::task::spawn_blocking(read_default_state)
            .await
            .map_err(|e| DomainError::ResolverInitFailed(format!("Resolver task failed: {}", e)))?
    }
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
mod platform {
    use libc::{c_char, c_int, c_uint, c_ulong, c_void, in_addr, sockaddr_in, sockaddr_in6};
    use resolver_audit_domain::{DomainError, ResolverState, MAX_SEARCH_DOMAINS};
    use std::ffi::CStr;
    use std::mem;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    const MAXNS: usize = 3;
    const MAXDNSRCH: usize = 6;
    const MAXRESOLVSORT: usize = 10;

    const _: () = assert!(MAXDNSRCH == MAX_SEARCH_DOMAINS);

    #[allow(dead_code)]
    #[repr(C)]
    struct SortListSlot {
        addr: in_addr,
        mask: u32,
    }

    #[allow(dead_code)]
    #[repr(C)]
    #[derive(Clone, Copy)]
    struct ResExt {
        nscount: u16,
        nsmap: [u16; MAXNS],
        nssocks: [c_int; MAXNS],
        nscount6: u16,
        nsinit: u16,
        nsaddrs: [*mut sockaddr_in6; MAXNS],
        reserved: [c_uint; 2],
    }

    #[allow(dead_code)]
    #[repr(C)]
    union ResUnion {
        pad: [c_char; 52],
        ext: ResExt,
    }

    /// Mirror of glibc's `struct __res_state` from <resolv.h>.
    #[allow(dead_code)]
    #[repr(C)]
    struct ResState {
        retrans: c_int,
        retry: c_int,
        options: c_ulong,
        nscount: c_int,
        nsaddr_list: [sockaddr_in; MAXNS],
        id: u16,
        dnsrch: [*mut c_char; MAXDNSRCH + 1],
        defdname: [c_char; 256],
        pfcode: c_ulong,
        // ndots:4, nsort:4, ipv6_unavail:1, unused:23
        bitfields: c_uint,
        sort_list: [SortListSlot; MAXRESOLVSORT],
        qhook: *mut c_void,
        rhook: *mut c_void,
        res_h_errno: c_int,
        vcsock: c_int,
        flags: c_uint,
        u: ResUnion,
    }

    impl ResState {
        #[cfg(target_endian = "little")]
        fn nsort(&self) -> usize {
            ((self.bitfields >> 4) & 0xf) as usize
        }

        #[cfg(target_endian = "big")]
        fn nsort(&self) -> usize {
            ((self.bitfields >> 24) & 0xf) as usize
        }
    }

    #[link(name = "resolv")]
    extern "C" {
        #[link_name = "__res_ninit"]
        fn res_ninit(state: *mut ResState) -> c_int;

        #[link_name = "__res_nclose"]
        fn res_nclose(state: *mut ResState);
    }

    /// An initialized resolver state; closed when dropped.
    struct ResolverGuard {
        state: Box<ResState>,
    }

    impl ResolverGuard {
        fn init() -> Result<Self, DomainError> {
            // SAFETY: ResState is plain data and raw pointers; all-zero is valid.
            let mut state: Box<ResState> = Box::new(unsafe { mem::zeroed() });
            state.vcsock = -1;

            // SAFETY: `state` is a live, correctly sized __res_state.
            let rc = unsafe { res_ninit(&mut *state) };
            if rc == -1 {
                // Nothing was attached to `state`, so there is nothing to close.
                return Err(DomainError::ResolverInitFailed(
                    "res_ninit returned -1".to_string(),
                ));
            }

            Ok(Self { state })
        }

        fn nameserver(&self, slot: usize) -> Option<IpAddr> {
            let v4 = &self.state.nsaddr_list[slot];
            if c_int::from(v4.sin_family) == libc::AF_INET {
                return Some(IpAddr::V4(Ipv4Addr::from(v4.sin_addr.s_addr.to_ne_bytes())));
            }

            // IPv6 servers live in the extension area; their v4 slot is unused.
            // SAFETY: res_ninit succeeded, so the `ext` view of the union is active.
            let v6 = unsafe { self.state.u.ext.nsaddrs[slot] };
            if v6.is_null() {
                return None;
            }
            // SAFETY: non-null nsaddrs entries point at sockaddr_in6 owned by the state.
            let v6 = unsafe { &*v6 };
            if c_int::from(v6.sin6_family) != libc::AF_INET6 {
                return None;
            }
            Some(IpAddr::V6(Ipv6Addr::from(v6.sin6_addr.s6_addr)))
        }

        fn search_domain(&self, slot: usize) -> Option<String> {
            let ptr = self.state.dnsrch[slot];
            if ptr.is_null() {
                return None;
            }
            // SAFETY: non-null dnsrch entries are NUL-terminated strings in defdname.
            let domain = unsafe { CStr::from_ptr(ptr) };
            Some(domain.to_string_lossy().into_owned())
        }

        /// Copies everything out; the result holds no pointer into the state.
        fn to_owned_state(&self) -> ResolverState {
            let mut state = ResolverState::new(self.state.options as u64);

            let nscount = usize::try_from(self.state.nscount).unwrap_or(0).min(MAXNS);
            for slot in 0..nscount {
                if let Some(addr) = self.nameserver(slot) {
                    state = state.with_nameserver(addr);
                }
            }

            for sort in self.state.sort_list.iter().take(self.state.nsort().min(MAXRESOLVSORT)) {
                let addr = Ipv4Addr::from(sort.addr.s_addr.to_ne_bytes());
                state = state.with_sortlist(addr, sort.mask);
            }

            for slot in 0..MAXDNSRCH {
                if let Some(domain) = self.search_domain(slot) {
                    state = state.with_search_slot(slot, domain);
                }
            }

            state
        }
    }

    impl Drop for ResolverGuard {
        fn drop(&mut self) {
            // SAFETY: the state was initialized by res_ninit and is closed once.
            unsafe { res_nclose(&mut *self.state) };
        }
    }

    pub(super) fn snapshot() -> Result<ResolverState, DomainError> {
        let guard = ResolverGuard::init()?;
        Ok(guard.to_owned_state())
    }
}

#[cfg(not(all(target_os = "linux", target_env = "gnu")))]
mod platform {
    use resolver_audit_domain::{DomainError, ResolverState};

    pub(super) fn snapshot() -> Result<ResolverState, DomainError> {
        Err(DomainError::ResolverInitFailed(
            "resolver library state is only readable on glibc targets".to_string(),
        ))
    }
}
