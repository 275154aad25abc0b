//! Mock operator console for testing. Serves pre-loaded command responses.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::console::{ConsoleResponse, OperatorConsole};
use crate::error::{ActionError, ActionResult};
use crate::parsers::{JOBNAME_VIEW_COMMAND, SYSTEM_VIEW_COMMAND};

/// Sample `D R,A,S` response: seven replies, one with a continuation line.
pub const SYSTEM_VIEW_SAMPLE: &str = "\
 MV27      2024015  12:41:10.69             IEE112I 12.41.10 PENDING REQUESTS 394
 RM=7     IM=0     CEM=0     EM=0     RU=0    IR=0    AMRF
 ID:R/K     T SYSNAME  JOB ID   MESSAGE TEXT
       001 R MV27     STC01537 *001 HWSC0000I *IMS CONNECT READY* IM5HCONN
       002 R MV27     STC01533 *002 DFS3139I IMS INITIALIZED, AUTOMATIC RESTART PROCEEDING IM5H
       05 R MV27              *05 IEE094D SPECIFY OPERAND(S) FOR DUMP COMMAND
       574 R MV28              *574 IXG312E OFFLOAD DELAYED FOR..
           IXGLOGR STRUCTURE LOG_TEST_001
       742 R MV28     JOB57578 &742 ARC0055A REPLY 'GO' OR 'CANCEL'
       810 R MV2D     JOB58389 &810 ARC0055A REPLY 'GO' OR 'CANCEL'
       399 R MV29     STC01999 *399 DSI802A CNM01    REPLY WITH VALID NCCF SYSTEM OPERATOR COMMAND
";

/// Sample `D R,A,JN` response. Reply 810 is missing and 901 is extra, so
/// the two samples merge to six actions.
pub const JOBNAME_VIEW_SAMPLE: &str = "\
 MV27      2024015  12:41:10.71             IEE112I 12.41.10 PENDING REQUESTS 395
 RM=7     IM=0     CEM=0     EM=0     RU=0    IR=0    AMRF
 ID:R/K     T JOB NAME MESSAGE TEXT
       001 R IM5HCONN *001 HWSC0000I *IMS CONNECT READY* IM5HCONN
       002 R IM5HCTRL *002 DFS3139I IMS INITIALIZED, AUTOMATIC RESTART PROCEEDING IM5H
       05 R          *05 IEE094D SPECIFY OPERAND(S) FOR DUMP COMMAND
       574 R IXGLOGR  *574 IXG312E OFFLOAD DELAYED FOR..
       742 R FVFNT29H &742 ARC0055A REPLY 'GO' OR 'CANCEL'
       399 R MQ29CHIN *399 DSI802A CNM01    REPLY WITH VALID NCCF SYSTEM OPERATOR COMMAND
       901 R IM5HDBRC *901 DFS810A IMS READY
";

/// A mock console that serves pre-loaded responses by command.
pub struct MockConsole {
    responses: HashMap<String, ConsoleResponse>,
    issued: Mutex<Vec<String>>,
}

impl MockConsole {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            issued: Mutex::new(Vec::new()),
        }
    }

    /// Serve `response` whenever `command` is issued.
    pub fn add_response(&mut self, command: impl Into<String>, response: ConsoleResponse) {
        self.responses.insert(command.into(), response);
    }

    /// Create a mock serving the sample `D R,A,S` and `D R,A,JN` responses.
    pub fn with_sample() -> Self {
        Self::with_views(SYSTEM_VIEW_SAMPLE, JOBNAME_VIEW_SAMPLE)
    }

    /// Create a mock serving the given view texts with rc 0.
    pub fn with_views(system_view: &str, jobname_view: &str) -> Self {
        let mut m = Self::new();
        m.add_response(SYSTEM_VIEW_COMMAND, ConsoleResponse::ok(system_view));
        m.add_response(JOBNAME_VIEW_COMMAND, ConsoleResponse::ok(jobname_view));
        m
    }

    /// Commands issued so far, in order.
    pub fn issued(&self) -> Vec<String> {
        self.issued.lock().unwrap().clone()
    }
}

impl Default for MockConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OperatorConsole for MockConsole {
    async fn execute(&self, command: &str) -> ActionResult<ConsoleResponse> {
        self.issued.lock().unwrap().push(command.to_string());
        self.responses.get(command).cloned().ok_or_else(|| {
            ActionError::Unexpected(format!("no response for console command '{command}'"))
        })
    }
}
