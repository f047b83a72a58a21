//! Static translation dictionaries. Both tables must carry the same keys.

pub const EN: &[(&str, &str)] = &[
    ("appName", "Nirantar"),
    ("tagline", "Disaster Communication Hub"),
    ("emergency", "Emergency"),
    ("help", "Help"),
    ("safety", "Safety"),
    ("contacts", "Contacts"),
    ("offline", "Offline Mode"),
    ("online", "Online"),
    ("needHelp", "Need Help"),
    ("offerHelp", "Offer Help"),
    ("emergencyContacts", "Emergency Contacts"),
    ("safetyTips", "Safety Tips"),
    ("nationalEmergency", "National Emergency"),
    ("police", "Police"),
    ("fire", "Fire Department"),
    ("ambulance", "Ambulance"),
    ("disasterManagement", "Disaster Management"),
    ("helpRequests", "Help Requests"),
    ("language", "Language"),
    ("english", "English"),
    ("hindi", "हिंदी"),
    ("connectionStatus", "Connection Status"),
    ("lastSync", "Last Sync"),
    ("syncNow", "Sync Now"),
    ("location", "Location"),
    ("description", "Description"),
    ("urgency", "Urgency Level"),
    ("high", "High"),
    ("medium", "Medium"),
    ("low", "Low"),
    ("submit", "Submit"),
    ("floodSafety", "Flood Safety Tips"),
    ("earthquakeSafety", "Earthquake Safety"),
    ("fireSafety", "Fire Safety"),
    ("generalEmergency", "General Emergency Tips"),
    ("call", "Call"),
    ("contact", "Contact"),
    ("contactOptional", "Contact (Optional)"),
    ("locationPlaceholder", "Area, landmark, or address"),
    (
        "needHelpPlaceholder",
        "Describe what help you need (food, water, medical, rescue, etc.)",
    ),
    (
        "offerHelpPlaceholder",
        "Describe what help you can offer (transportation, supplies, shelter, etc.)",
    ),
    ("contactPlaceholder", "Phone number or other contact info"),
    ("noHelpRequests", "No help requests yet"),
    ("never", "Never"),
    ("offlineBadge", "Offline"),
    ("pendingSync", "Pending Sync"),
    ("fillRequiredFields", "Please fill all required fields"),
    ("requestSubmitted", "Request submitted successfully"),
    ("requestSubmittedDetail", "Your request has been sent."),
    ("requestSavedOffline", "Request saved offline"),
    (
        "requestSavedOfflineDetail",
        "Will sync when connection is restored.",
    ),
    ("syncCompleted", "Data sync completed"),
    ("syncFailed", "Sync failed"),
    ("syncUnavailableOffline", "Sync is unavailable while offline"),
    ("info", "Info"),
    ("aboutTitle", "About Nirantar"),
    (
        "aboutSummary",
        "Nirantar is a disaster-resilient communication system designed to work even when internet and mobile networks fail during emergencies.",
    ),
    ("keyFeatures", "Key Features"),
    ("featureOffline", "Works offline - all data stored locally"),
    ("featureSync", "Automatically syncs when connection is restored"),
    ("featureLanguages", "Multilingual support (Hindi & English)"),
    ("featureContacts", "Emergency contacts always accessible"),
    ("featureCommunity", "Community help coordination"),
    ("howItWorks", "How it works"),
    ("howOffline", "Access emergency information offline"),
    ("howSubmit", "Submit help requests that sync when online"),
    ("howCommunity", "Stay connected with your community during disasters"),
    (
        "callEmergencyNotice",
        "Always call emergency services (112) for immediate life-threatening situations",
    ),
];

pub const HI: &[(&str, &str)] = &[
    ("appName", "निरंतर"),
    ("tagline", "आपदा संचार केंद्र"),
    ("emergency", "आपातकाल"),
    ("help", "मदद"),
    ("safety", "सुरक्षा"),
    ("contacts", "संपर्क"),
    ("offline", "ऑफलाइन मोड"),
    ("online", "ऑनलाइन"),
    ("needHelp", "मदद चाहिए"),
    ("offerHelp", "मदद की पेशकश"),
    ("emergencyContacts", "आपातकालीन संपर्क"),
    ("safetyTips", "सुरक्षा सुझाव"),
    ("nationalEmergency", "राष्ट्रीय आपातकाल"),
    ("police", "पुलिस"),
    ("fire", "अग्निशमन विभाग"),
    ("ambulance", "एम्बुलेंस"),
    ("disasterManagement", "आपदा प्रबंधन"),
    ("helpRequests", "सहायता अनुरोध"),
    ("language", "भाषा"),
    ("english", "English"),
    ("hindi", "हिंदी"),
    ("connectionStatus", "कनेक्शन स्थिति"),
    ("lastSync", "अंतिम सिंक"),
    ("syncNow", "अभी सिंक करें"),
    ("location", "स्थान"),
    ("description", "विवरण"),
    ("urgency", "तात्कालिकता स्तर"),
    ("high", "उच्च"),
    ("medium", "मध्यम"),
    ("low", "कम"),
    ("submit", "जमा करें"),
    ("floodSafety", "बाढ़ सुरक्षा सुझाव"),
    ("earthquakeSafety", "भूकंप सुरक्षा"),
    ("fireSafety", "आग सुरक्षा"),
    ("generalEmergency", "सामान्य आपातकालीन सुझाव"),
    ("call", "कॉल करें"),
    ("contact", "संपर्क"),
    ("contactOptional", "संपर्क (वैकल्पिक)"),
    ("locationPlaceholder", "क्षेत्र, पहचान चिह्न या पता"),
    (
        "needHelpPlaceholder",
        "बताएं कि आपको किस मदद की ज़रूरत है (भोजन, पानी, चिकित्सा, बचाव आदि)",
    ),
    (
        "offerHelpPlaceholder",
        "बताएं कि आप कौन सी मदद दे सकते हैं (परिवहन, सामग्री, आश्रय आदि)",
    ),
    ("contactPlaceholder", "फ़ोन नंबर या अन्य संपर्क जानकारी"),
    ("noHelpRequests", "अभी तक कोई सहायता अनुरोध नहीं"),
    ("never", "कभी नहीं"),
    ("offlineBadge", "ऑफलाइन"),
    ("pendingSync", "सिंक लंबित"),
    ("fillRequiredFields", "कृपया सभी आवश्यक फ़ील्ड भरें"),
    ("requestSubmitted", "अनुरोध सफलतापूर्वक जमा हुआ"),
    ("requestSubmittedDetail", "आपका अनुरोध भेज दिया गया है।"),
    ("requestSavedOffline", "अनुरोध ऑफलाइन सहेजा गया"),
    (
        "requestSavedOfflineDetail",
        "कनेक्शन बहाल होने पर सिंक होगा।",
    ),
    ("syncCompleted", "डेटा सिंक पूरा हुआ"),
    ("syncFailed", "सिंक विफल"),
    ("syncUnavailableOffline", "ऑफलाइन रहते हुए सिंक उपलब्ध नहीं है"),
    ("info", "जानकारी"),
    ("aboutTitle", "निरंतर के बारे में"),
    (
        "aboutSummary",
        "निरंतर एक आपदा-रोधी संचार प्रणाली है जो आपात स्थिति में इंटरनेट और मोबाइल नेटवर्क बंद होने पर भी काम करती है।",
    ),
    ("keyFeatures", "मुख्य विशेषताएं"),
    ("featureOffline", "ऑफलाइन काम करता है - सारा डेटा स्थानीय रूप से संग्रहीत"),
    ("featureSync", "कनेक्शन बहाल होने पर अपने आप सिंक"),
    ("featureLanguages", "बहुभाषी समर्थन (हिंदी और अंग्रेज़ी)"),
    ("featureContacts", "आपातकालीन संपर्क हमेशा उपलब्ध"),
    ("featureCommunity", "सामुदायिक सहायता समन्वय"),
    ("howItWorks", "यह कैसे काम करता है"),
    ("howOffline", "आपातकालीन जानकारी ऑफलाइन देखें"),
    ("howSubmit", "सहायता अनुरोध जमा करें जो ऑनलाइन होने पर सिंक होते हैं"),
    ("howCommunity", "आपदा के दौरान अपने समुदाय से जुड़े रहें"),
    (
        "callEmergencyNotice",
        "जानलेवा स्थिति में तुरंत आपातकालीन सेवा (112) पर कॉल करें",
    ),
];
