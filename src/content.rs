//! static FAQ copy for each product page

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

const fn faq(question: &'static str, answer: &'static str) -> Faq {
    Faq { question, answer }
}

#[derive(Debug, Clone, Copy)]
pub struct PageContent {
    pub heading: &'static str,
    pub intro: &'static str,
    pub faqs: &'static [Faq],
}

pub const ANSIBLE: PageContent = PageContent {
    heading: "Ansible Automation Platform",
    intro: "Answers to common questions about Red Hat Ansible Automation Platform.",
    faqs: &[
        faq(
            "What is included in an Ansible Automation Platform subscription?",
            "Automation controller, private automation hub, execution environments and certified content collections.",
        ),
        faq(
            "Can I run automation controller on OpenShift?",
            "Yes. The platform operator installs and manages controller and hub on OpenShift clusters.",
        ),
    ],
};

pub const OCP: PageContent = PageContent {
    heading: "OpenShift Container Platform",
    intro: "Answers to common questions about Red Hat OpenShift Container Platform.",
    faqs: &[
        faq(
            "How is OpenShift licensed?",
            "Subscriptions are counted in cores or sockets of the worker nodes that run application workloads.",
        ),
        faq(
            "Which infrastructure does OpenShift run on?",
            "Bare metal, the major public clouds, and private clouds built on vSphere or OpenStack.",
        ),
    ],
};

pub const RHEL: PageContent = PageContent {
    heading: "Red Hat Enterprise Linux",
    intro: "Answers to common questions about Red Hat Enterprise Linux.",
    faqs: &[
        faq(
            "How long is a RHEL major release supported?",
            "Ten years of full and maintenance support, with optional extended life cycle support after that.",
        ),
        faq(
            "Is RHEL available in the public clouds?",
            "Yes, as pay-as-you-go images or through Cloud Access with an existing subscription.",
        ),
    ],
};

pub const RHOAI: PageContent = PageContent {
    heading: "Red Hat OpenShift AI",
    intro: "Answers to common questions about Red Hat OpenShift AI.",
    faqs: &[
        faq(
            "What does OpenShift AI add on top of OpenShift?",
            "Workbenches, data science pipelines, model serving and monitoring for the full model life cycle.",
        ),
        faq(
            "Does OpenShift AI support GPUs?",
            "Yes. Accelerators are exposed to workbenches and model servers through the relevant operators.",
        ),
    ],
};

pub const RHO: PageContent = PageContent {
    heading: "RHO 2025 FAQ",
    intro: "Logistics and agenda questions for RHO 2025.",
    faqs: &[
        faq(
            "Where do I find the session agenda?",
            "The agenda is published on the event portal and updated as sessions are confirmed.",
        ),
        faq(
            "Who do I contact about travel?",
            "Reach out to your regional event coordinator listed on the event portal.",
        ),
    ],
};
